//! Datamap tag → type name mapping.
//!
//! Datamap descriptions carry a [`FieldType`] tag instead of a type string.
//! The tag maps straight to a finished target type name; the names are never
//! re-parsed, even the ones that look generic (`CHandle<CBaseEntity>`).
//! Tags without a mapping leave the canonical type empty so the caller can
//! decide how to report them.

use fieldgen_ir::{FieldDescriptor, FieldType};
use tracing::warn;

/// The target type name for a datamap tag, or `None` if the tag has no mapping.
pub const fn canonical_type_for(tag: FieldType) -> Option<&'static str> {
    let name = match tag {
        FieldType::Float32 | FieldType::EngineTime => "float",
        FieldType::Time => "GameTime_t",
        FieldType::Float64 => "double",
        FieldType::Int16 => "int16_t",
        FieldType::Int32 => "int32_t",
        FieldType::Int64 => "int64_t",
        FieldType::Uint8 => "uint8_t",
        FieldType::Uint16 => "uint16_t",
        FieldType::Uint32 => "uint32_t",
        FieldType::Uint64 => "uint64_t",
        FieldType::Boolean => "bool",
        FieldType::Character => "char",
        FieldType::Void | FieldType::Custom => "void",
        FieldType::String => "CUtlSymbolLarge",
        FieldType::Vector
        | FieldType::PositionVector
        | FieldType::NetworkOriginCellQuantizedVector
        | FieldType::DirectionVectorWorldspace
        | FieldType::NetworkQuantizedVector => "Vector",
        FieldType::Vector2D => "Vector2D",
        FieldType::Vector4D => "Vector4D",
        FieldType::QAngle | FieldType::QAngleWorldspace => "QAngle",
        FieldType::Quaternion => "Quaternion",
        FieldType::CString => "const char*",
        FieldType::UtlString => "CUtlString",
        FieldType::UtlStringToken => "CUtlStringToken",
        FieldType::Color32 => "Color",
        FieldType::WorldGroupId => "WorldGroupId_t",
        FieldType::RotationVector => "RotationVector",
        FieldType::CTransformWorldspace => "CTransform",
        FieldType::EHandle => "CHandle<CBaseEntity>",
        FieldType::HModel => "CStrongHandle<InfoForResourceTypeCModel>",
        FieldType::HMaterial => "CStrongHandle<InfoForResourceTypeIMaterial2>",
        FieldType::Shim => "SHIM",
        FieldType::Function => "void*",
        _ => return None,
    };
    Some(name)
}

/// Build a descriptor for a tagged datamap field.
pub(crate) fn describe_field_type(tag: FieldType, field_name: &str, array_size: usize) -> FieldDescriptor {
    let mut field = scalar_or_array(field_name, array_size);
    if field.field_type.is_unused() {
        field.field_type = tag;
    }

    match canonical_type_for(field.field_type) {
        Some(name) => field.canonical_type = name.to_owned(),
        None => warn!(tag = %field.field_type, field = field_name, "datamap tag has no type mapping"),
    }
    field
}

/// Build a descriptor for a raw tag byte; unknown bytes leave the field untagged.
pub(crate) fn describe_raw_field_type(raw: u8, field_name: &str, array_size: usize) -> FieldDescriptor {
    match FieldType::from_repr(raw) {
        Some(tag) => describe_field_type(tag, field_name, array_size),
        None => {
            warn!(raw, field = field_name, "datamap tag outside the field type enumeration");
            scalar_or_array(field_name, array_size)
        }
    }
}

/// A length of 0 or 1 is a scalar.
fn scalar_or_array(field_name: &str, array_size: usize) -> FieldDescriptor {
    let dims = [array_size];
    let dims: &[usize] = if array_size > 1 { &dims } else { &[] };
    FieldDescriptor::with_dimensions(field_name, dims)
}
