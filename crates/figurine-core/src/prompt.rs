//! Text prompt describing a figurine, for an image-generation service.
//!
//! No service is called; the prompt is logged and shown next to the preview.

use crate::options::{ClothingStyle, ColorScheme, Gender, OptionSet, Pose};

fn gender_phrase(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "a man",
        Gender::Female => "a woman",
        Gender::Neutral => "a person",
    }
}

fn clothing_phrase(clothing: ClothingStyle) -> &'static str {
    match clothing {
        ClothingStyle::Casual => "in casual clothes",
        ClothingStyle::Formal => "in a business suit",
        ClothingStyle::Tech => "in a hoodie and sneakers",
        ClothingStyle::Custom => "in a custom outfit",
    }
}

fn pose_phrase(pose: Pose) -> &'static str {
    match pose {
        Pose::Standing => "standing calmly",
        Pose::Sitting => "sitting",
        Pose::Working => "working",
        Pose::Dynamic => "in a dynamic pose",
    }
}

fn color_phrase(scheme: ColorScheme) -> &'static str {
    match scheme {
        ColorScheme::Vibrant => "bright and cheerful",
        ColorScheme::Professional => "professional",
        ColorScheme::Pastel => "pastel",
        ColorScheme::Dark => "dark and stylish",
    }
}

pub fn figurine_prompt(options: &OptionSet) -> String {
    let accessories = if options.accessories().is_empty() {
        String::new()
    } else {
        let names: Vec<&str> = options.accessories().iter().map(|a| a.as_str()).collect();
        format!(", with {}", names.join(", "))
    };
    format!(
        "Create a realistic custom 3D figurine of {} {}, {}{}. Color scheme: {}. \
         Style: professional and friendly. High quality, detailed work.",
        gender_phrase(options.gender),
        clothing_phrase(options.clothing),
        pose_phrase(options.pose),
        accessories,
        color_phrase(options.color_scheme),
    )
}
