//! Customization choices collected from the preview form.
//!
//! Every field is an enumerated value. Parsing a single value reports
//! [`UnknownOption`], but building an [`OptionSet`] from raw form strings
//! never fails: unknown or missing values fall back to the field default and
//! unknown accessory names are dropped.

use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// A form value that does not name any known choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} option: {value:?}")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, default = $default:ident,
        { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($text => Ok($name::$variant),)+
                    other => Err(UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

option_enum!(
    Gender, "gender", default = Neutral,
    { Male => "male", Female => "female", Neutral => "neutral" }
);

option_enum!(
    ClothingStyle, "clothing", default = Casual,
    { Casual => "casual", Formal => "formal", Tech => "tech", Custom => "custom" }
);

option_enum!(
    Pose, "pose", default = Standing,
    { Standing => "standing", Sitting => "sitting", Working => "working", Dynamic => "dynamic" }
);

option_enum!(
    ColorScheme, "color scheme", default = Professional,
    { Vibrant => "vibrant", Professional => "professional", Pastel => "pastel", Dark => "dark" }
);

option_enum!(
    /// Optional meshes layered onto the mannequin.
    AccessoryKind, "accessory", default = Glasses,
    { Glasses => "glasses", Cap => "cap", Laptop => "laptop", Coffee => "coffee", Beard => "beard" }
);

/// Accessory kinds in the order they were supplied, without duplicates.
pub type AccessoryList = SmallVec<[AccessoryKind; 5]>;

/// Snapshot of the form taken when a preview is generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionSet {
    pub gender: Gender,
    pub clothing: ClothingStyle,
    pub pose: Pose,
    pub color_scheme: ColorScheme,
    accessories: AccessoryList,
}

impl OptionSet {
    pub fn new(
        gender: Gender,
        clothing: ClothingStyle,
        pose: Pose,
        color_scheme: ColorScheme,
        accessories: impl IntoIterator<Item = AccessoryKind>,
    ) -> Self {
        let mut set = Self {
            gender,
            clothing,
            pose,
            color_scheme,
            accessories: AccessoryList::new(),
        };
        for kind in accessories {
            set.add_accessory(kind);
        }
        set
    }

    /// Build from raw form values, substituting defaults for anything unknown.
    pub fn from_form<'a>(
        gender: Option<&str>,
        clothing: Option<&str>,
        pose: Option<&str>,
        color_scheme: Option<&str>,
        accessories: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::new(
            parse_or_default(gender),
            parse_or_default(clothing),
            parse_or_default(pose),
            parse_or_default(color_scheme),
            accessories.into_iter().filter_map(|raw| match raw.parse() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    log::debug!("[options] ignoring {}", e);
                    None
                }
            }),
        )
    }

    pub fn accessories(&self) -> &[AccessoryKind] {
        &self.accessories
    }

    /// Adds `kind` unless already present. Returns whether it was added.
    pub fn add_accessory(&mut self, kind: AccessoryKind) -> bool {
        if self.accessories.contains(&kind) {
            return false;
        }
        self.accessories.push(kind);
        true
    }

    pub fn has_accessory(&self, kind: AccessoryKind) -> bool {
        self.accessories.contains(&kind)
    }
}

fn parse_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr<Err = UnknownOption> + Default,
{
    match raw.filter(|s| !s.trim().is_empty()).map(str::parse::<T>) {
        Some(Ok(v)) => v,
        Some(Err(e)) => {
            log::debug!("[options] {}; using default", e);
            T::default()
        }
        None => T::default(),
    }
}
