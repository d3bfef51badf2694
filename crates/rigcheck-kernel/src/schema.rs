//! JSON schemas for the specifications of the well-known part categories.
//!
//! Catalog-side validation only. The engine never calls this: a part with
//! odd specifications still gets evaluated, with "cannot verify" findings
//! where the data falls short.

use crate::error::ValidationError;
use crate::part::{CASE, COOLER, CPU, GPU, MOTHERBOARD, PSU, RAM, STORAGE};
use crate::spec_value::Specifications;
use jsonschema::Draft;
use serde_json::{Map, Value, json};

fn text() -> Value {
    json!({ "type": "string" })
}

fn flag() -> Value {
    json!({ "type": "boolean" })
}

fn at_least(minimum: u32) -> Value {
    json!({ "type": "number", "minimum": minimum })
}

fn text_list() -> Value {
    json!({ "type": "array", "items": { "type": "string" } })
}

fn object(properties: Value) -> Value {
    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": true,
    })
}

/// The specification schema for a category; `None` for categories without
/// one (anything goes).
pub fn schema_for(part_type: &str) -> Option<Value> {
    let properties = match part_type {
        CPU => json!({
            "socket": text(),
            "core_count": at_least(1),
            "thread_count": at_least(1),
            "clock_speed": at_least(0),
            "boost_clock": at_least(0),
            "tdp": at_least(0),
            "power_draw": at_least(0),
            "manufacturing_process": text(),
            "integrated_graphics": flag(),
        }),
        GPU => json!({
            "memory_size": at_least(0),
            "memory_type": text(),
            "clock_speed": at_least(0),
            "boost_clock": at_least(0),
            "cuda_cores": at_least(0),
            "tdp": at_least(0),
            "power_draw": at_least(0),
            "pcie_slot": text(),
            "length": at_least(0),
            "width": at_least(0),
        }),
        RAM => json!({
            "memory_size": at_least(0),
            "speed": at_least(0),
            "type": text(),
            "cas_latency": at_least(0),
            "voltage": at_least(0),
            "form_factor": text(),
            "modules": at_least(1),
        }),
        MOTHERBOARD => json!({
            "socket": text(),
            "form_factor": text(),
            "chipset": text(),
            "memory_slots": at_least(0),
            "max_memory": at_least(0),
            "memory_type": text(),
            "pcie_slots": at_least(0),
            "sata_ports": at_least(0),
            "m2_slots": at_least(0),
            "usb_ports": at_least(0),
            "supported_interfaces": text_list(),
        }),
        STORAGE => json!({
            "storage_capacity": at_least(0),
            "interface": text(),
            "form_factor": text(),
            "read_speed": at_least(0),
            "write_speed": at_least(0),
            "rpm": at_least(0),
            "cache": at_least(0),
            "power_draw": at_least(0),
        }),
        PSU => json!({
            "wattage": at_least(0),
            "efficiency_rating": text(),
            "modular": flag(),
            "sata_connectors": at_least(0),
            "pcie_connectors": at_least(0),
            "cpu_connectors": at_least(0),
        }),
        CASE => json!({
            "form_factor": text(),
            "supported_form_factors": text_list(),
            "max_gpu_length": at_least(0),
            "max_cpu_cooler_height": at_least(0),
            "drive_bays": at_least(0),
            "fan_support": text(),
            "dimensions": text(),
        }),
        COOLER => json!({
            "type": text(),
            "socket_compatibility": text_list(),
            "height": at_least(0),
            "tdp": at_least(0),
            "noise_level": at_least(0),
            "fan_size": at_least(0),
            "power_draw": at_least(0),
        }),
        _ => return None,
    };
    Some(object(properties))
}

/// Validate specifications against the category schema.
///
/// Unknown keys and `null` values are accepted. Keys are checked one at a
/// time in sorted order, so the first reported problem is stable.
pub fn validate_specifications(
    part_type: &str,
    specifications: &Specifications,
) -> Result<(), ValidationError> {
    let Some(schema) = schema_for(part_type) else {
        return Ok(());
    };
    let validator = jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        .map_err(|err| ValidationError::Schema {
            part_type: part_type.to_string(),
            reason: err.to_string(),
        })?;

    for (key, value) in specifications.iter().filter(|(_, v)| !v.is_null()) {
        let invalid = |reason: String| ValidationError::InvalidSpecification {
            part_type: part_type.to_string(),
            key: key.clone(),
            reason,
        };
        let value = serde_json::to_value(value).map_err(|err| invalid(err.to_string()))?;
        let mut entry = Map::new();
        entry.insert(key.clone(), value);
        let entry = Value::Object(entry);
        if let Some(err) = validator.iter_errors(&entry).next() {
            return Err(invalid(err.to_string()));
        }
    }
    Ok(())
}

/// Recommended (not required) specification keys for a category, sorted.
pub fn recommended_keys(part_type: &str) -> Vec<String> {
    let mut keys: Vec<String> = schema_for(part_type)
        .as_ref()
        .and_then(|schema| schema.get("properties"))
        .and_then(Value::as_object)
        .map(|properties| properties.keys().cloned().collect())
        .unwrap_or_default();
    keys.sort();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::Part;

    fn rejected_key(part: &Part) -> String {
        match validate_specifications(part.part_type.as_str(), &part.specifications) {
            Err(ValidationError::InvalidSpecification { key, .. }) => key,
            other => panic!("expected an invalid specification, got {other:?}"),
        }
    }

    #[test]
    fn accepts_well_formed_specs() {
        let part = Part::new(1, "cpu", CPU)
            .with_spec("socket", "AM5")
            .with_spec("core_count", 8.0)
            .with_spec("integrated_graphics", true)
            .with_spec("vendor_sku", 12345.0);
        assert_eq!(validate_specifications(CPU, &part.specifications), Ok(()));
    }

    #[test]
    fn rejects_wrong_kind() {
        let part = Part::new(1, "psu", PSU).with_spec("wattage", "750W");
        let err = validate_specifications(PSU, &part.specifications).expect_err("text wattage");
        let message = err.to_string();
        assert!(message.starts_with("invalid specifications for PSU: `wattage`:"));
        assert!(message.contains("number"));
    }

    #[test]
    fn rejects_below_minimum() {
        let part = Part::new(1, "cpu", CPU).with_spec("core_count", 0.0);
        assert_eq!(rejected_key(&part), "core_count");
    }

    #[test]
    fn text_list_must_be_a_list_of_text() {
        let bare = Part::new(1, "case", CASE).with_spec("supported_form_factors", "ATX");
        assert_eq!(rejected_key(&bare), "supported_form_factors");

        let mixed = Part::new(1, "case", CASE).with_spec(
            "supported_form_factors",
            vec![crate::SpecValue::from("ATX"), crate::SpecValue::from(3.0)],
        );
        assert_eq!(rejected_key(&mixed), "supported_form_factors");
    }

    #[test]
    fn first_offending_key_in_sorted_order() {
        let part = Part::new(1, "board", MOTHERBOARD)
            .with_spec("usb_ports", -1.0)
            .with_spec("chipset", 650.0)
            .with_spec("socket", true);
        assert_eq!(rejected_key(&part), "chipset");
    }

    #[test]
    fn null_values_are_ignored() {
        let part = Part::new(1, "gpu", GPU).with_spec("length", crate::SpecValue::Null);
        assert_eq!(validate_specifications(GPU, &part.specifications), Ok(()));
    }

    #[test]
    fn unknown_category_accepts_anything() {
        let part = Part::new(1, "fan", "Fan").with_spec("rpm", "fast");
        assert_eq!(validate_specifications("Fan", &part.specifications), Ok(()));
        assert!(recommended_keys("Fan").is_empty());
    }

    #[test]
    fn recommended_keys_come_from_schema_properties() {
        let keys = recommended_keys(PSU);
        assert_eq!(keys.len(), 6);
        assert!(keys.contains(&"wattage".to_string()));
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }
}
