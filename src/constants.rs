/// Page wiring and message timing for the web front-end.
///
/// Element ids match the landing page markup. Scene tuning (camera, colors,
/// geometry) lives in `figurine_core::constants`.

// Preview form
pub const PREVIEW_FORM_ID: &str = "previewForm";
pub const PHOTO_INPUT_ID: &str = "photoUpload";
pub const GENDER_SELECT_ID: &str = "gender";
pub const CLOTHING_SELECT_ID: &str = "clothing";
pub const POSE_SELECT_ID: &str = "pose";
pub const COLOR_SELECT_ID: &str = "color";
pub const ACCESSORY_CHECKED_SELECTOR: &str = "input[name=\"accessories\"]:checked";

// Preview area
pub const PREVIEW_BOX_ID: &str = "previewBox";
pub const CANVAS_ID: &str = "canvas3d";
pub const CONTROLS_3D_ID: &str = "controls3d";
pub const PREVIEW_INFO_ID: &str = "previewInfo";
pub const PREVIEW_MESSAGE_ID: &str = "previewMessage";
pub const TOGGLE_3D_ID: &str = "toggle3d";
pub const TOGGLE_TO_3D_LABEL: &str = "Switch to 3D";
pub const TOGGLE_TO_2D_LABEL: &str = "Switch to 2D";

// Buttons
pub const GENERATE_BUTTON_ID: &str = "generateBtn";
pub const CONFIRM_BUTTON_ID: &str = "confirmBtn";
pub const EDIT_BUTTON_ID: &str = "editBtn";

// Order form
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const FORM_MESSAGE_ID: &str = "formMessage";
pub const CONTACT_SECTION_SELECTOR: &str = ".contact-section";
pub const ORDER_NAME_SELECTOR: &str = "[name=\"name\"]";
pub const ORDER_EMAIL_SELECTOR: &str = "[name=\"email\"]";
pub const ORDER_PHONE_SELECTOR: &str = "[name=\"phone\"]";
pub const ORDER_COMPANY_SELECTOR: &str = "[name=\"company\"]";
// Markup without name attributes: text inputs in page order
pub const ORDER_INPUT_SELECTOR: &str = "input";
pub const ORDER_NAME_INPUT_INDEX: u32 = 0;
pub const ORDER_EMAIL_INPUT_INDEX: u32 = 1;
pub const ORDER_PHONE_INPUT_INDEX: u32 = 2;
pub const ORDER_COMPANY_INPUT_INDEX: u32 = 3;
pub const ORDER_FIGURE_TYPE_SELECTOR: &str = "select";
pub const ORDER_MESSAGE_SELECTOR: &str = "textarea";

// Message lifetimes (milliseconds)
pub const READY_MESSAGE_MS: i32 = 3_000;
pub const ORDER_MESSAGE_MS: i32 = 5_000;

// Photo overlay border, same hue as the accent light
pub const PHOTO_BORDER_CSS: &str = "3px solid #667eea";
