//! Порт логирования пользовательских событий.
//!
//! Every operation is fire-and-forget: nothing is returned and delivery failures
//! stay inside the implementing sink. Constrained integer arguments are closed
//! enums from [`crate::codes`], so an out-of-set value cannot reach a sink.

use crate::codes::{
    DailyMetadataFailure, DailyRotationStatus, DailyUpdateCrash, DailyUpdateResult, EffectStatus,
    WallpaperSetFailureReason, WallpaperSetResult,
};
use crate::event::UserEvent;
use crate::models::{ActionLabelRef, LaunchSource};

/// Logs user actions and operational outcomes for analytics.
///
/// Implementors only have to provide [`UserEventLogger::log_event`]; each per-event
/// method builds the matching [`UserEvent`] and hands it over. Sinks that want the
/// raw arguments can override individual methods instead.
pub trait UserEventLogger: Send + Sync {
    fn log_event(&self, event: UserEvent);

    fn log_app_launched(&self, source: &LaunchSource) {
        self.log_event(UserEvent::AppLaunched {
            source: source.clone(),
        });
    }

    fn log_action_clicked(&self, collection_id: &str, action_label: ActionLabelRef) {
        self.log_event(UserEvent::ActionClicked {
            collection_id: collection_id.to_string(),
            action_label,
        });
    }

    fn log_individual_wallpaper_selected(&self, collection_id: &str) {
        self.log_event(UserEvent::IndividualWallpaperSelected {
            collection_id: collection_id.to_string(),
        });
    }

    fn log_category_selected(&self, collection_id: &str) {
        self.log_event(UserEvent::CategorySelected {
            collection_id: collection_id.to_string(),
        });
    }

    /// Снимок текущего состояния обоев
    fn log_snapshot(&self) {
        self.log_event(UserEvent::Snapshot);
    }

    /// Any argument may be absent; `None` wallpaper id means no specific wallpaper.
    fn log_wallpaper_set(
        &self,
        collection_id: Option<&str>,
        wallpaper_id: Option<&str>,
        effects: Option<&str>,
    ) {
        self.log_event(UserEvent::WallpaperSet {
            collection_id: collection_id.map(str::to_string),
            wallpaper_id: wallpaper_id.map(str::to_string),
            effects: effects.map(str::to_string),
        });
    }

    fn log_wallpaper_set_result(&self, result: WallpaperSetResult) {
        self.log_event(UserEvent::WallpaperSetResult { result });
    }

    fn log_wallpaper_set_failure_reason(&self, reason: WallpaperSetFailureReason) {
        self.log_event(UserEvent::WallpaperSetFailureReason { reason });
    }

    /// Caller must only report this once daily rotation has been enabled for at least a week.
    fn log_num_daily_wallpaper_rotations_in_last_week(&self) {
        self.log_event(UserEvent::NumDailyWallpaperRotationsInLastWeek);
    }

    /// Caller must only report this once daily rotation has been enabled since at least
    /// midnight of the previous day.
    fn log_num_daily_wallpaper_rotations_previous_day(&self) {
        self.log_event(UserEvent::NumDailyWallpaperRotationsPreviousDay);
    }

    fn log_daily_wallpaper_rotation_status(&self, status: DailyRotationStatus) {
        self.log_event(UserEvent::DailyWallpaperRotationStatus { status });
    }

    fn log_daily_wallpaper_update_result(&self, result: DailyUpdateResult) {
        self.log_event(UserEvent::DailyWallpaperUpdateResult { result });
    }

    fn log_daily_wallpaper_update_crash(&self, crash: DailyUpdateCrash) {
        self.log_event(UserEvent::DailyWallpaperUpdateCrash { crash });
    }

    fn log_daily_wallpaper_metadata_failure(&self, reason: DailyMetadataFailure) {
        self.log_event(UserEvent::DailyWallpaperMetadataFailure { reason });
    }

    fn log_refresh_daily_wallpaper_button_clicked(&self) {
        self.log_event(UserEvent::RefreshDailyWallpaperButtonClicked);
    }

    fn log_num_days_daily_rotation_failed(&self, days: u32) {
        self.log_event(UserEvent::NumDaysDailyRotationFailed { days });
    }

    /// Days on which network conditions blocked the attempt are not counted.
    fn log_num_days_daily_rotation_not_attempted(&self, days: u32) {
        self.log_event(UserEvent::NumDaysDailyRotationNotAttempted { days });
    }

    fn log_standalone_preview_launched(&self) {
        self.log_event(UserEvent::StandalonePreviewLaunched);
    }

    fn log_standalone_preview_image_uri_has_read_permission(&self, granted: bool) {
        self.log_event(UserEvent::StandalonePreviewImageUriHasReadPermission { granted });
    }

    fn log_standalone_preview_storage_dialog_approved(&self, approved: bool) {
        self.log_event(UserEvent::StandalonePreviewStorageDialogApproved { approved });
    }

    fn log_wallpaper_presentation_mode(&self) {
        self.log_event(UserEvent::WallpaperPresentationMode);
    }

    /// Приложение восстановлено из резервной копии
    fn log_restored(&self) {
        self.log_event(UserEvent::Restored);
    }

    fn log_effect_apply(
        &self,
        effect: &str,
        status: EffectStatus,
        elapsed_ms: u64,
        result_code: i32,
    ) {
        self.log_event(UserEvent::EffectApply {
            effect: effect.to_string(),
            status,
            elapsed_ms,
            result_code,
        });
    }

    fn log_effect_probe(&self, effect: &str, status: EffectStatus) {
        self.log_event(UserEvent::EffectProbe {
            effect: effect.to_string(),
            status,
        });
    }

    fn log_effect_foreground_download(&self, effect: &str, status: EffectStatus, elapsed_ms: u64) {
        self.log_event(UserEvent::EffectForegroundDownload {
            effect: effect.to_string(),
            status,
            elapsed_ms,
        });
    }
}

/// Логгер, который ничего не делает (аналитика отключена)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpUserEventLogger;

impl UserEventLogger for NoOpUserEventLogger {
    fn log_event(&self, _event: UserEvent) {}
}
