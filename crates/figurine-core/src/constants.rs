use std::f32::consts::PI;

// Shared scene and interaction tuning constants used by the web frontend.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_DISTANCE: f32 = 3.0;
pub const CAMERA_MIN_DISTANCE: f32 = 1.5; // closest zoom
pub const CAMERA_MAX_DISTANCE: f32 = 6.0; // farthest zoom
pub const ZOOM_STEP: f32 = 0.2; // distance change per wheel notch

// Render surface height is fixed; width follows the container
pub const SURFACE_HEIGHT: u32 = 400;

// Interaction
pub const AUTO_ROTATE_STEP: f32 = 0.005; // radians of yaw per frame while idle
pub const DRAG_YAW_PER_PX: f32 = 0.005;
pub const DRAG_PITCH_PER_PX: f32 = 0.005;

// Lighting rig
pub const BACKGROUND_COLOR: u32 = 0xf8f9ff;
pub const AMBIENT_COLOR: u32 = 0xffffff;
pub const AMBIENT_INTENSITY: f32 = 0.6;
pub const KEY_LIGHT_COLOR: u32 = 0xffffff;
pub const KEY_LIGHT_INTENSITY: f32 = 0.8;
pub const KEY_LIGHT_POSITION: [f32; 3] = [5.0, 10.0, 7.0];
pub const ACCENT_LIGHT_COLOR: u32 = 0x667eea;
pub const ACCENT_LIGHT_INTENSITY: f32 = 0.5;
pub const ACCENT_LIGHT_POSITION: [f32; 3] = [-5.0, 3.0, 5.0];

// Body palette
pub const SKIN_COLOR: u32 = 0xf5deb3;
pub const LEG_COLOR: u32 = 0x333333;

// Color schemes (applied to the body only)
pub const VIBRANT_BODY_COLOR: u32 = 0xff6b6b; // warm red
pub const PROFESSIONAL_BODY_COLOR: u32 = 0x667eea; // indigo
pub const PASTEL_BODY_COLOR: u32 = 0xffb6c1; // pink
pub const DARK_BODY_COLOR: u32 = 0x2c3e50; // slate

// Pose
pub const SITTING_BODY_SCALE_Y: f32 = 0.7;
pub const SITTING_OFFSET_Y: f32 = -0.3;
pub const DYNAMIC_TILT: f32 = PI / 12.0;

// Default body layout
pub const BODY_Y: f32 = 0.2;
pub const HEAD_Y: f32 = 1.3;
pub const ARM_X: f32 = 0.55;
pub const ARM_Y: f32 = 0.6;
pub const ARM_TILT: f32 = PI / 6.0;
pub const LEG_X: f32 = 0.25;
pub const LEG_Y: f32 = -0.6;

// Accessory placement
pub const GLASSES_Y: f32 = 1.45;
pub const GLASSES_Z: f32 = 0.3;
pub const GLASSES_LENS_X: f32 = 0.15;
pub const CAP_Y: f32 = 1.6;
pub const LAPTOP_POSITION: [f32; 3] = [-0.6, 0.4, 0.0];
pub const COFFEE_POSITION: [f32; 3] = [0.6, 0.3, 0.0];
pub const BEARD_POSITION: [f32; 3] = [0.0, 1.0, 0.3];
pub const BEARD_SCALE: [f32; 3] = [0.6, 0.4, 0.3];

// Accessory palette
pub const GLASSES_COLOR: u32 = 0x000000;
pub const CAP_COLOR: u32 = 0xff6b6b;
pub const LAPTOP_COLOR: u32 = 0x333333;
pub const COFFEE_COLOR: u32 = 0x8b4513;
pub const BEARD_COLOR: u32 = 0x8b6f47;
