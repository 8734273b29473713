// Host-side tests for option parsing and the lenient form snapshot.

use figurine_core::*;

#[test]
fn every_enumerated_value_round_trips_through_its_name() {
    for g in Gender::ALL {
        assert_eq!(g.as_str().parse::<Gender>(), Ok(*g));
    }
    for c in ClothingStyle::ALL {
        assert_eq!(c.as_str().parse::<ClothingStyle>(), Ok(*c));
    }
    for p in Pose::ALL {
        assert_eq!(p.as_str().parse::<Pose>(), Ok(*p));
    }
    for s in ColorScheme::ALL {
        assert_eq!(s.to_string().parse::<ColorScheme>(), Ok(*s));
    }
    for a in AccessoryKind::ALL {
        assert_eq!(a.as_str().parse::<AccessoryKind>(), Ok(*a));
    }
}

#[test]
fn unknown_value_reports_field_and_value() {
    let err = "sideways".parse::<Pose>().unwrap_err();
    assert_eq!(err.field, "pose");
    assert_eq!(err.value, "sideways");
    assert_eq!(err.to_string(), "unknown pose option: \"sideways\"");
}

#[test]
fn parsing_is_case_sensitive_but_trims() {
    assert_eq!(" dark ".parse::<ColorScheme>(), Ok(ColorScheme::Dark));
    assert!("Dark".parse::<ColorScheme>().is_err());
}

#[test]
fn form_snapshot_falls_back_to_defaults() {
    let set = OptionSet::from_form(Some(""), Some("toga"), None, Some("rainbow"), []);
    assert_eq!(set.gender, Gender::Neutral);
    assert_eq!(set.clothing, ClothingStyle::Casual);
    assert_eq!(set.pose, Pose::Standing);
    assert_eq!(set.color_scheme, ColorScheme::Professional);
    assert!(set.accessories().is_empty());
    assert_eq!(set, OptionSet::default());
}

#[test]
fn accessories_keep_order_and_drop_duplicates() {
    let set = OptionSet::from_form(
        None,
        None,
        None,
        None,
        ["cap", "beard", "cap", "wings", "glasses", "beard"],
    );
    assert_eq!(
        set.accessories(),
        &[
            AccessoryKind::Cap,
            AccessoryKind::Beard,
            AccessoryKind::Glasses
        ]
    );
    assert!(set.has_accessory(AccessoryKind::Beard));
    assert!(!set.has_accessory(AccessoryKind::Laptop));
}

#[test]
fn add_accessory_reports_duplicates() {
    let mut set = OptionSet::default();
    assert!(set.add_accessory(AccessoryKind::Coffee));
    assert!(!set.add_accessory(AccessoryKind::Coffee));
    assert_eq!(set.accessories().len(), 1);
}
