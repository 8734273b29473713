// Host-side tests for the generate / toggle / edit flow and the order form.

use figurine_core::order::{is_valid_email, is_valid_phone, OrderError, OrderForm};
use figurine_core::prompt::figurine_prompt;
use figurine_core::*;

#[derive(Default)]
struct NullSurface {
    draws: usize,
}

impl RenderSurface for NullSurface {
    type Error = ();

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn draw(&mut self, _frame: &SceneFrame<'_>) -> Result<(), ()> {
        self.draws += 1;
        Ok(())
    }
}

fn ready_preview() -> Preview<NullSurface> {
    let mut preview = Preview::default();
    assert!(preview.scene.initialize(NullSurface::default(), 600));
    preview
}

fn tech_options() -> OptionSet {
    OptionSet::new(
        Gender::Female,
        ClothingStyle::Tech,
        Pose::Standing,
        ColorScheme::Dark,
        [AccessoryKind::Glasses, AccessoryKind::Laptop],
    )
}

#[test]
fn begin_requires_photo_then_options() {
    let mut preview: Preview<NullSurface> = Preview::default();
    assert_eq!(preview.begin(false, true), Err(PreviewError::MissingPhoto));
    assert_eq!(
        preview.status(),
        PreviewStatus::Error(PreviewError::MissingPhoto)
    );
    assert_eq!(
        preview.begin(true, false),
        Err(PreviewError::IncompleteOptions)
    );
    assert_eq!(preview.begin(true, true), Ok(()));
    assert_eq!(preview.status(), PreviewStatus::Loading);
    assert_eq!(preview.mode(), ViewMode::Flat);
}

#[test]
fn generate_switches_to_3d_and_customizes() {
    let mut preview = ready_preview();
    preview.generate_preview(tech_options());
    assert_eq!(preview.mode(), ViewMode::ThreeD);
    assert_eq!(preview.status(), PreviewStatus::Ready);
    assert_eq!(preview.options(), Some(&tech_options()));

    let m = preview.scene.mannequin().expect("mannequin");
    assert_eq!(m.body().material.color, constants::DARK_BODY_COLOR);
    let kinds: Vec<_> = m.accessories().iter().map(|a| a.kind).collect();
    assert_eq!(kinds, vec![AccessoryKind::Glasses, AccessoryKind::Laptop]);
}

#[test]
fn regenerate_reconciles_instead_of_rebuilding() {
    let mut preview = ready_preview();
    preview.generate_preview(tech_options());
    preview.scene.render_loop_tick();
    let yaw = preview.scene.mannequin().map(|m| m.yaw()).unwrap_or_default();
    assert!(yaw > 0.0);

    preview.generate_preview(OptionSet::new(
        Gender::Female,
        ClothingStyle::Tech,
        Pose::Standing,
        ColorScheme::Dark,
        [AccessoryKind::Coffee],
    ));
    let m = preview.scene.mannequin().expect("mannequin");
    // yaw survives; only the option-driven attributes changed
    assert!((m.yaw() - yaw).abs() < 1e-6);
    assert_eq!(m.accessories().len(), 1);
    assert!(m.accessory(AccessoryKind::Coffee).is_some());
}

#[test]
fn toggle_changes_visibility_only() {
    let mut preview = ready_preview();
    preview.generate_preview(tech_options());
    let before = preview.scene.mannequin().cloned();
    assert_eq!(preview.toggle_mode(false), ViewMode::Flat);
    assert_eq!(preview.toggle_mode(true), ViewMode::ThreeD);
    assert_eq!(preview.scene.mannequin().cloned(), before);
    assert_eq!(preview.status(), PreviewStatus::Ready);
}

#[test]
fn edit_returns_to_flat_and_keeps_scene() {
    let mut preview = ready_preview();
    preview.generate_preview(tech_options());
    preview.edit();
    assert_eq!(preview.mode(), ViewMode::Flat);
    assert_eq!(preview.status(), PreviewStatus::Editing);
    assert!(preview.scene.mannequin().is_some());

    // toggling back to the model after editing needs no regeneration
    assert_eq!(preview.toggle_mode(true), ViewMode::ThreeD);
    assert_eq!(preview.options(), Some(&tech_options()));
}

#[test]
fn renderer_failure_stays_on_photo_and_survives_dismiss() {
    let mut preview: Preview<NullSurface> = Preview::default();
    preview.renderer_failed();
    assert_eq!(preview.mode(), ViewMode::Flat);
    preview.dismiss_status();
    assert_eq!(
        preview.status(),
        PreviewStatus::Error(PreviewError::RendererUnavailable)
    );
}

#[test]
fn unreadable_photo_leaves_loading_and_stays_until_next_attempt() {
    let mut preview = ready_preview();
    preview.generate_preview(tech_options());
    assert_eq!(preview.begin(true, true), Ok(()));
    preview.photo_failed();
    assert_eq!(
        preview.status(),
        PreviewStatus::Error(PreviewError::PhotoUnreadable)
    );
    // the earlier model is still on screen
    assert_eq!(preview.mode(), ViewMode::ThreeD);
    preview.dismiss_status();
    assert_eq!(
        preview.status(),
        PreviewStatus::Error(PreviewError::PhotoUnreadable)
    );

    assert_eq!(preview.begin(true, true), Ok(()));
    assert_eq!(preview.status(), PreviewStatus::Loading);
}

#[test]
fn ready_status_dismisses_to_idle() {
    let mut preview = ready_preview();
    preview.generate_preview(OptionSet::default());
    preview.dismiss_status();
    assert_eq!(preview.status(), PreviewStatus::Idle);
    assert_eq!(preview.mode(), ViewMode::ThreeD);
}

#[test]
fn generate_without_surface_still_records_options() {
    let mut preview: Preview<NullSurface> = Preview::default();
    preview.generate_preview(tech_options());
    assert!(preview.scene.mannequin().is_some());
    assert_eq!(preview.status(), PreviewStatus::Ready);
}

#[test]
fn prompt_mentions_every_choice() {
    let prompt = figurine_prompt(&tech_options());
    assert!(prompt.starts_with("Create a realistic custom 3D figurine of a woman"));
    assert!(prompt.contains("hoodie"));
    assert!(prompt.contains("standing calmly, with glasses, laptop."));
    assert!(prompt.contains("Color scheme: dark and stylish."));

    let plain = figurine_prompt(&OptionSet::default());
    assert!(plain.contains("a person in casual clothes, standing calmly. "));
    assert!(!plain.contains("with"));
}

fn filled_order() -> OrderForm {
    OrderForm {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "+44 (20) 7946-0000".into(),
        company: "Analytical Engines".into(),
        figure_type: "single".into(),
        message: String::new(),
    }
}

#[test]
fn complete_order_validates() {
    assert_eq!(filled_order().validate(), Ok(()));
}

#[test]
fn order_checks_run_in_order() {
    let mut order = filled_order();
    order.company = "   ".into();
    order.email = "broken".into();
    assert_eq!(order.validate(), Err(OrderError::MissingFields));

    order.company = "Acme".into();
    assert_eq!(order.validate(), Err(OrderError::InvalidEmail));

    order.email = "a@b.co".into();
    order.phone = "call me".into();
    assert_eq!(order.validate(), Err(OrderError::InvalidPhone));
}

#[test]
fn email_shapes() {
    for ok in ["a@b.co", "first.last@sub.example.org"] {
        assert!(is_valid_email(ok), "{}", ok);
    }
    for bad in ["", "a@b", "@b.co", "a@.co", "a@b.", "a b@c.de", "a@b@c.de"] {
        assert!(!is_valid_email(bad), "{}", bad);
    }
}

#[test]
fn phone_shapes() {
    assert!(is_valid_phone("555-0100"));
    assert!(is_valid_phone("+1 (555) 010 0100"));
    assert!(!is_valid_phone(""));
    assert!(!is_valid_phone("555-CALL"));
}
