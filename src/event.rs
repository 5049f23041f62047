use crate::codes::{
    DailyMetadataFailure, DailyRotationStatus, DailyUpdateCrash, DailyUpdateResult, EffectStatus,
    WallpaperSetFailureReason, WallpaperSetResult,
};
use crate::logger::UserEventLogger;
use crate::models::{ActionLabelRef, LaunchSource};
use crate::names;
use serde::{Deserialize, Serialize};

/// Одно событие порта логирования со всеми аргументами вызова.
/// Serialized with an internal `event` tag equal to [`UserEvent::name`]; codes go out as bare integers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UserEvent {
    AppLaunched {
        source: LaunchSource,
    },
    ActionClicked {
        collection_id: String,
        action_label: ActionLabelRef,
    },
    IndividualWallpaperSelected {
        collection_id: String,
    },
    CategorySelected {
        collection_id: String,
    },
    Snapshot,
    WallpaperSet {
        collection_id: Option<String>,
        wallpaper_id: Option<String>,
        effects: Option<String>,
    },
    WallpaperSetResult {
        result: WallpaperSetResult,
    },
    WallpaperSetFailureReason {
        reason: WallpaperSetFailureReason,
    },
    NumDailyWallpaperRotationsInLastWeek,
    NumDailyWallpaperRotationsPreviousDay,
    DailyWallpaperRotationStatus {
        status: DailyRotationStatus,
    },
    DailyWallpaperUpdateResult {
        result: DailyUpdateResult,
    },
    DailyWallpaperUpdateCrash {
        crash: DailyUpdateCrash,
    },
    DailyWallpaperMetadataFailure {
        reason: DailyMetadataFailure,
    },
    RefreshDailyWallpaperButtonClicked,
    NumDaysDailyRotationFailed {
        days: u32,
    },
    NumDaysDailyRotationNotAttempted {
        days: u32,
    },
    StandalonePreviewLaunched,
    StandalonePreviewImageUriHasReadPermission {
        granted: bool,
    },
    StandalonePreviewStorageDialogApproved {
        approved: bool,
    },
    WallpaperPresentationMode,
    Restored,
    EffectApply {
        effect: String,
        status: EffectStatus,
        elapsed_ms: u64,
        result_code: i32,
    },
    EffectProbe {
        effect: String,
        status: EffectStatus,
    },
    EffectForegroundDownload {
        effect: String,
        status: EffectStatus,
        elapsed_ms: u64,
    },
}

impl UserEvent {
    pub fn name(&self) -> &'static str {
        match self {
            UserEvent::AppLaunched { .. } => names::APP_LAUNCHED,
            UserEvent::ActionClicked { .. } => names::ACTION_CLICKED,
            UserEvent::IndividualWallpaperSelected { .. } => names::INDIVIDUAL_WALLPAPER_SELECTED,
            UserEvent::CategorySelected { .. } => names::CATEGORY_SELECTED,
            UserEvent::Snapshot => names::SNAPSHOT,
            UserEvent::WallpaperSet { .. } => names::WALLPAPER_SET,
            UserEvent::WallpaperSetResult { .. } => names::WALLPAPER_SET_RESULT,
            UserEvent::WallpaperSetFailureReason { .. } => names::WALLPAPER_SET_FAILURE_REASON,
            UserEvent::NumDailyWallpaperRotationsInLastWeek => {
                names::NUM_DAILY_WALLPAPER_ROTATIONS_IN_LAST_WEEK
            }
            UserEvent::NumDailyWallpaperRotationsPreviousDay => {
                names::NUM_DAILY_WALLPAPER_ROTATIONS_PREVIOUS_DAY
            }
            UserEvent::DailyWallpaperRotationStatus { .. } => names::DAILY_WALLPAPER_ROTATION_STATUS,
            UserEvent::DailyWallpaperUpdateResult { .. } => names::DAILY_WALLPAPER_UPDATE_RESULT,
            UserEvent::DailyWallpaperUpdateCrash { .. } => names::DAILY_WALLPAPER_UPDATE_CRASH,
            UserEvent::DailyWallpaperMetadataFailure { .. } => {
                names::DAILY_WALLPAPER_METADATA_FAILURE
            }
            UserEvent::RefreshDailyWallpaperButtonClicked => {
                names::REFRESH_DAILY_WALLPAPER_BUTTON_CLICKED
            }
            UserEvent::NumDaysDailyRotationFailed { .. } => names::NUM_DAYS_DAILY_ROTATION_FAILED,
            UserEvent::NumDaysDailyRotationNotAttempted { .. } => {
                names::NUM_DAYS_DAILY_ROTATION_NOT_ATTEMPTED
            }
            UserEvent::StandalonePreviewLaunched => names::STANDALONE_PREVIEW_LAUNCHED,
            UserEvent::StandalonePreviewImageUriHasReadPermission { .. } => {
                names::STANDALONE_PREVIEW_IMAGE_URI_HAS_READ_PERMISSION
            }
            UserEvent::StandalonePreviewStorageDialogApproved { .. } => {
                names::STANDALONE_PREVIEW_STORAGE_DIALOG_APPROVED
            }
            UserEvent::WallpaperPresentationMode => names::WALLPAPER_PRESENTATION_MODE,
            UserEvent::Restored => names::RESTORED,
            UserEvent::EffectApply { .. } => names::EFFECT_APPLY,
            UserEvent::EffectProbe { .. } => names::EFFECT_PROBE,
            UserEvent::EffectForegroundDownload { .. } => names::EFFECT_FOREGROUND_DOWNLOAD,
        }
    }

    /// Событие о сбое (уходит в лог на уровне WARN)
    pub fn is_failure(&self) -> bool {
        match self {
            UserEvent::WallpaperSetResult { result } => result.is_failure(),
            UserEvent::WallpaperSetFailureReason { .. }
            | UserEvent::DailyWallpaperUpdateCrash { .. }
            | UserEvent::DailyWallpaperMetadataFailure { .. } => true,
            UserEvent::DailyWallpaperUpdateResult { result } => result.is_failure(),
            UserEvent::DailyWallpaperRotationStatus { status } => {
                *status == DailyRotationStatus::Failed
            }
            _ => false,
        }
    }

    /// Повторить исходный вызов порта на другом логгере с теми же аргументами
    pub fn replay<L: UserEventLogger + ?Sized>(&self, logger: &L) {
        match self {
            UserEvent::AppLaunched { source } => logger.log_app_launched(source),
            UserEvent::ActionClicked {
                collection_id,
                action_label,
            } => logger.log_action_clicked(collection_id, *action_label),
            UserEvent::IndividualWallpaperSelected { collection_id } => {
                logger.log_individual_wallpaper_selected(collection_id)
            }
            UserEvent::CategorySelected { collection_id } => {
                logger.log_category_selected(collection_id)
            }
            UserEvent::Snapshot => logger.log_snapshot(),
            UserEvent::WallpaperSet {
                collection_id,
                wallpaper_id,
                effects,
            } => logger.log_wallpaper_set(
                collection_id.as_deref(),
                wallpaper_id.as_deref(),
                effects.as_deref(),
            ),
            UserEvent::WallpaperSetResult { result } => logger.log_wallpaper_set_result(*result),
            UserEvent::WallpaperSetFailureReason { reason } => {
                logger.log_wallpaper_set_failure_reason(*reason)
            }
            UserEvent::NumDailyWallpaperRotationsInLastWeek => {
                logger.log_num_daily_wallpaper_rotations_in_last_week()
            }
            UserEvent::NumDailyWallpaperRotationsPreviousDay => {
                logger.log_num_daily_wallpaper_rotations_previous_day()
            }
            UserEvent::DailyWallpaperRotationStatus { status } => {
                logger.log_daily_wallpaper_rotation_status(*status)
            }
            UserEvent::DailyWallpaperUpdateResult { result } => {
                logger.log_daily_wallpaper_update_result(*result)
            }
            UserEvent::DailyWallpaperUpdateCrash { crash } => {
                logger.log_daily_wallpaper_update_crash(*crash)
            }
            UserEvent::DailyWallpaperMetadataFailure { reason } => {
                logger.log_daily_wallpaper_metadata_failure(*reason)
            }
            UserEvent::RefreshDailyWallpaperButtonClicked => {
                logger.log_refresh_daily_wallpaper_button_clicked()
            }
            UserEvent::NumDaysDailyRotationFailed { days } => {
                logger.log_num_days_daily_rotation_failed(*days)
            }
            UserEvent::NumDaysDailyRotationNotAttempted { days } => {
                logger.log_num_days_daily_rotation_not_attempted(*days)
            }
            UserEvent::StandalonePreviewLaunched => logger.log_standalone_preview_launched(),
            UserEvent::StandalonePreviewImageUriHasReadPermission { granted } => {
                logger.log_standalone_preview_image_uri_has_read_permission(*granted)
            }
            UserEvent::StandalonePreviewStorageDialogApproved { approved } => {
                logger.log_standalone_preview_storage_dialog_approved(*approved)
            }
            UserEvent::WallpaperPresentationMode => logger.log_wallpaper_presentation_mode(),
            UserEvent::Restored => logger.log_restored(),
            UserEvent::EffectApply {
                effect,
                status,
                elapsed_ms,
                result_code,
            } => logger.log_effect_apply(effect, *status, *elapsed_ms, *result_code),
            UserEvent::EffectProbe { effect, status } => logger.log_effect_probe(effect, *status),
            UserEvent::EffectForegroundDownload {
                effect,
                status,
                elapsed_ms,
            } => logger.log_effect_foreground_download(effect, *status, *elapsed_ms),
        }
    }
}
