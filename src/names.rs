//! Centralized analytics event names.
//! Shared by `UserEvent::name`, the serde tag and the tracing sink; values are part of the backend contract.

pub const APP_LAUNCHED: &str = "app_launched";
pub const ACTION_CLICKED: &str = "action_clicked";
pub const INDIVIDUAL_WALLPAPER_SELECTED: &str = "individual_wallpaper_selected";
pub const CATEGORY_SELECTED: &str = "category_selected";
pub const SNAPSHOT: &str = "snapshot";
pub const WALLPAPER_SET: &str = "wallpaper_set";
pub const WALLPAPER_SET_RESULT: &str = "wallpaper_set_result";
pub const WALLPAPER_SET_FAILURE_REASON: &str = "wallpaper_set_failure_reason";
pub const NUM_DAILY_WALLPAPER_ROTATIONS_IN_LAST_WEEK: &str =
    "num_daily_wallpaper_rotations_in_last_week";
pub const NUM_DAILY_WALLPAPER_ROTATIONS_PREVIOUS_DAY: &str =
    "num_daily_wallpaper_rotations_previous_day";
pub const DAILY_WALLPAPER_ROTATION_STATUS: &str = "daily_wallpaper_rotation_status";
pub const DAILY_WALLPAPER_UPDATE_RESULT: &str = "daily_wallpaper_update_result";
pub const DAILY_WALLPAPER_UPDATE_CRASH: &str = "daily_wallpaper_update_crash";
pub const DAILY_WALLPAPER_METADATA_FAILURE: &str = "daily_wallpaper_metadata_failure";
pub const REFRESH_DAILY_WALLPAPER_BUTTON_CLICKED: &str = "refresh_daily_wallpaper_button_clicked";
pub const NUM_DAYS_DAILY_ROTATION_FAILED: &str = "num_days_daily_rotation_failed";
pub const NUM_DAYS_DAILY_ROTATION_NOT_ATTEMPTED: &str = "num_days_daily_rotation_not_attempted";
pub const STANDALONE_PREVIEW_LAUNCHED: &str = "standalone_preview_launched";
pub const STANDALONE_PREVIEW_IMAGE_URI_HAS_READ_PERMISSION: &str =
    "standalone_preview_image_uri_has_read_permission";
pub const STANDALONE_PREVIEW_STORAGE_DIALOG_APPROVED: &str =
    "standalone_preview_storage_dialog_approved";
pub const WALLPAPER_PRESENTATION_MODE: &str = "wallpaper_presentation_mode";
pub const RESTORED: &str = "restored";
pub const EFFECT_APPLY: &str = "effect_apply";
pub const EFFECT_PROBE: &str = "effect_probe";
pub const EFFECT_FOREGROUND_DOWNLOAD: &str = "effect_foreground_download";

/// Every event name, in port declaration order.
pub const ALL: &[&str] = &[
    APP_LAUNCHED,
    ACTION_CLICKED,
    INDIVIDUAL_WALLPAPER_SELECTED,
    CATEGORY_SELECTED,
    SNAPSHOT,
    WALLPAPER_SET,
    WALLPAPER_SET_RESULT,
    WALLPAPER_SET_FAILURE_REASON,
    NUM_DAILY_WALLPAPER_ROTATIONS_IN_LAST_WEEK,
    NUM_DAILY_WALLPAPER_ROTATIONS_PREVIOUS_DAY,
    DAILY_WALLPAPER_ROTATION_STATUS,
    DAILY_WALLPAPER_UPDATE_RESULT,
    DAILY_WALLPAPER_UPDATE_CRASH,
    DAILY_WALLPAPER_METADATA_FAILURE,
    REFRESH_DAILY_WALLPAPER_BUTTON_CLICKED,
    NUM_DAYS_DAILY_ROTATION_FAILED,
    NUM_DAYS_DAILY_ROTATION_NOT_ATTEMPTED,
    STANDALONE_PREVIEW_LAUNCHED,
    STANDALONE_PREVIEW_IMAGE_URI_HAS_READ_PERMISSION,
    STANDALONE_PREVIEW_STORAGE_DIALOG_APPROVED,
    WALLPAPER_PRESENTATION_MODE,
    RESTORED,
    EFFECT_APPLY,
    EFFECT_PROBE,
    EFFECT_FOREGROUND_DOWNLOAD,
];
