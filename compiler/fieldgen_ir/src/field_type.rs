//! Datamap field-type enumeration.
//!
//! `FieldType` mirrors the engine's `fieldtype_t`: a `u8`-backed closed set of
//! tags that datamap descriptions carry instead of a type string. The
//! discriminants are the engine's wire values and must not be reordered.
//!
//! `FieldType::Unused` (24) doubles as the "no tag" sentinel on descriptors
//! produced by the string path.

use std::fmt;

/// Declares `FieldType` together with its discriminant-ordered variant list
/// and engine spellings, so the three can never drift apart.
macro_rules! field_types {
    ($($variant:ident = $value:literal => $name:literal,)*) => {
        /// A datamap field-type tag.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        #[repr(u8)]
        pub enum FieldType {
            $($variant = $value,)*
        }

        impl FieldType {
            /// Every tag, in discriminant order (`ALL[n] as u8 == n`).
            pub const ALL: &'static [FieldType] = &[$(FieldType::$variant,)*];

            /// The engine spelling of this tag, e.g. `FIELD_FLOAT32`.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(FieldType::$variant => $name,)*
                }
            }
        }
    };
}

field_types! {
    Void = 0 => "FIELD_VOID",
    Float32 = 1 => "FIELD_FLOAT32",
    String = 2 => "FIELD_STRING",
    Vector = 3 => "FIELD_VECTOR",
    Quaternion = 4 => "FIELD_QUATERNION",
    Int32 = 5 => "FIELD_INT32",
    Boolean = 6 => "FIELD_BOOLEAN",
    Int16 = 7 => "FIELD_INT16",
    Character = 8 => "FIELD_CHARACTER",
    Color32 = 9 => "FIELD_COLOR32",
    Embedded = 10 => "FIELD_EMBEDDED",
    Custom = 11 => "FIELD_CUSTOM",
    ClassPtr = 12 => "FIELD_CLASSPTR",
    EHandle = 13 => "FIELD_EHANDLE",
    PositionVector = 14 => "FIELD_POSITION_VECTOR",
    Time = 15 => "FIELD_TIME",
    Tick = 16 => "FIELD_TICK",
    SoundName = 17 => "FIELD_SOUNDNAME",
    Input = 18 => "FIELD_INPUT",
    Function = 19 => "FIELD_FUNCTION",
    VMatrix = 20 => "FIELD_VMATRIX",
    VMatrixWorldspace = 21 => "FIELD_VMATRIX_WORLDSPACE",
    Matrix3x4Worldspace = 22 => "FIELD_MATRIX3X4_WORLDSPACE",
    Interval = 23 => "FIELD_INTERVAL",
    Unused = 24 => "FIELD_UNUSED",
    Vector2D = 25 => "FIELD_VECTOR2D",
    Int64 = 26 => "FIELD_INT64",
    Vector4D = 27 => "FIELD_VECTOR4D",
    Resource = 28 => "FIELD_RESOURCE",
    TypeUnknown = 29 => "FIELD_TYPEUNKNOWN",
    CString = 30 => "FIELD_CSTRING",
    HScript = 31 => "FIELD_HSCRIPT",
    Variant = 32 => "FIELD_VARIANT",
    Uint64 = 33 => "FIELD_UINT64",
    Float64 = 34 => "FIELD_FLOAT64",
    PositiveIntegerOrNull = 35 => "FIELD_POSITIVEINTEGER_OR_NULL",
    HScriptNewInstance = 36 => "FIELD_HSCRIPT_NEW_INSTANCE",
    Uint32 = 37 => "FIELD_UINT32",
    UtlStringToken = 38 => "FIELD_UTLSTRINGTOKEN",
    QAngle = 39 => "FIELD_QANGLE",
    NetworkOriginCellQuantizedVector = 40 => "FIELD_NETWORK_ORIGIN_CELL_QUANTIZED_VECTOR",
    HMaterial = 41 => "FIELD_HMATERIAL",
    HModel = 42 => "FIELD_HMODEL",
    NetworkQuantizedVector = 43 => "FIELD_NETWORK_QUANTIZED_VECTOR",
    NetworkQuantizedFloat = 44 => "FIELD_NETWORK_QUANTIZED_FLOAT",
    DirectionVectorWorldspace = 45 => "FIELD_DIRECTION_VECTOR_WORLDSPACE",
    QAngleWorldspace = 46 => "FIELD_QANGLE_WORLDSPACE",
    QuaternionWorldspace = 47 => "FIELD_QUATERNION_WORLDSPACE",
    HScriptLightBinding = 48 => "FIELD_HSCRIPT_LIGHTBINDING",
    V8Value = 49 => "FIELD_V8_VALUE",
    V8Object = 50 => "FIELD_V8_OBJECT",
    V8Array = 51 => "FIELD_V8_ARRAY",
    V8CallbackInfo = 52 => "FIELD_V8_CALLBACK_INFO",
    UtlString = 53 => "FIELD_UTLSTRING",
    NetworkOriginCellQuantizedPositionVector = 54 => "FIELD_NETWORK_ORIGIN_CELL_QUANTIZED_POSITION_VECTOR",
    HRenderTexture = 55 => "FIELD_HRENDERTEXTURE",
    HParticleSystemDefinition = 56 => "FIELD_HPARTICLESYSTEMDEFINITION",
    Uint8 = 57 => "FIELD_UINT8",
    Uint16 = 58 => "FIELD_UINT16",
    CTransform = 59 => "FIELD_CTRANSFORM",
    CTransformWorldspace = 60 => "FIELD_CTRANSFORM_WORLDSPACE",
    HPostProcessing = 61 => "FIELD_HPOSTPROCESSING",
    Matrix3x4 = 62 => "FIELD_MATRIX3X4",
    Shim = 63 => "FIELD_SHIM",
    CMotionTransform = 64 => "FIELD_CMOTIONTRANSFORM",
    CMotionTransformWorldspace = 65 => "FIELD_CMOTIONTRANSFORM_WORLDSPACE",
    AttachmentHandle = 66 => "FIELD_ATTACHMENT_HANDLE",
    AmmoIndex = 67 => "FIELD_AMMO_INDEX",
    ConditionId = 68 => "FIELD_CONDITION_ID",
    AiScheduleBits = 69 => "FIELD_AI_SCHEDULE_BITS",
    ModifierHandle = 70 => "FIELD_MODIFIER_HANDLE",
    RotationVector = 71 => "FIELD_ROTATION_VECTOR",
    RotationVectorWorldspace = 72 => "FIELD_ROTATION_VECTOR_WORLDSPACE",
    HVData = 73 => "FIELD_HVDATA",
    Scale32 = 74 => "FIELD_SCALE32",
    StringAndToken = 75 => "FIELD_STRING_AND_TOKEN",
    EngineTime = 76 => "FIELD_ENGINE_TIME",
    EngineTick = 77 => "FIELD_ENGINE_TICK",
    WorldGroupId = 78 => "FIELD_WORLD_GROUP_ID",
    GlobalSymbol = 79 => "FIELD_GLOBALSYMBOL",
    TypeCount = 80 => "FIELD_TYPECOUNT",
}

impl FieldType {
    /// Look up a tag by its raw discriminant.
    ///
    /// Returns `None` for values past `FIELD_TYPECOUNT`.
    #[must_use]
    pub fn from_repr(raw: u8) -> Option<Self> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Look up a tag by name.
    ///
    /// Accepts the engine spelling (`FIELD_BOOLEAN`) or the bare suffix
    /// (`BOOLEAN`), ASCII case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let bare = name
            .get(..6)
            .filter(|prefix| prefix.eq_ignore_ascii_case("FIELD_"))
            .map_or(name, |_| &name[6..]);

        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name()[6..].eq_ignore_ascii_case(bare))
    }

    /// The raw discriminant.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Check if this is the `FIELD_UNUSED` sentinel.
    #[inline]
    #[must_use]
    pub const fn is_unused(self) -> bool {
        matches!(self, FieldType::Unused)
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Unused
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when a raw byte does not name a `FieldType`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UnknownFieldType(pub u8);

impl fmt::Display for UnknownFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field type {} is outside the datamap enumeration (max {})",
            self.0,
            FieldType::TypeCount.raw()
        )
    }
}

impl std::error::Error for UnknownFieldType {}

impl TryFrom<u8> for FieldType {
    type Error = UnknownFieldType;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_repr(raw).ok_or(UnknownFieldType(raw))
    }
}
