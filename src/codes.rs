//! Closed integer code sets carried by the logging port.
//! Numeric values are the wire contract with the analytics backend and must not change.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ошибка конвертации сырого кода в закрытое перечисление
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    OutOfRange { kind: &'static str, value: i32 },
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeError::OutOfRange { kind, value } => {
                write!(f, "{} is not a valid {} code", value, kind)
            }
        }
    }
}

impl std::error::Error for CodeError {}

macro_rules! closed_code {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> i32 {
                self as i32
            }
        }

        impl TryFrom<i32> for $name {
            type Error = CodeError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $( $value => Ok($name::$variant), )+
                    _ => Err(CodeError::OutOfRange {
                        kind: stringify!($name),
                        value,
                    }),
                }
            }
        }

        impl From<$name> for i32 {
            fn from(code: $name) -> i32 {
                code.code()
            }
        }
    };
}

closed_code! {
    /// Итог установки обоев
    WallpaperSetResult {
        Success = 0,
        Failure = 1,
    }
}

closed_code! {
    /// Причина неудачной установки обоев
    WallpaperSetFailureReason {
        Other = 0,
        Oom = 1,
    }
}

closed_code! {
    /// Итог ежедневного обновления обоев
    DailyUpdateResult {
        Success = 0,
        FailureLoadMetadata = 1,
        FailureLoadBitmap = 2,
        FailureSetWallpaper = 3,
        FailureCrash = 4,
    }
}

closed_code! {
    /// Вид падения во время ежедневного обновления
    DailyUpdateCrash {
        Generic = 0,
        Oom = 1,
    }
}

closed_code! {
    /// Причина, по которой не удалось загрузить метаданные ежедневной ротации
    DailyMetadataFailure {
        Unknown = 0,
        NoConnection = 1,
        ParseError = 2,
        ServerError = 3,
        Timeout = 4,
    }
}

closed_code! {
    /// Состояние применения визуального эффекта
    EffectStatus {
        Unspecified = 0,
        AppliedOnSuccess = 1,
        AppliedOnFailed = 2,
        AppliedOff = 3,
        AppliedAborted = 4,
        AppliedStarted = 5,
    }
}

impl WallpaperSetResult {
    pub fn is_failure(self) -> bool {
        self == WallpaperSetResult::Failure
    }
}

impl DailyUpdateResult {
    pub fn is_failure(self) -> bool {
        self != DailyUpdateResult::Success
    }
}

closed_code! {
    /// Статус ежедневной ротации.
    /// Именованы только 0 и 5; значения 1..=4 зарезервированы и передаются как есть.
    DailyRotationStatus {
        NotAttempted = 0,
        Reserved1 = 1,
        Reserved2 = 2,
        Reserved3 = 3,
        Reserved4 = 4,
        Failed = 5,
    }
}

impl DailyRotationStatus {
    pub fn is_named(self) -> bool {
        matches!(
            self,
            DailyRotationStatus::NotAttempted | DailyRotationStatus::Failed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_status_round_trips_every_member() {
        for status in EffectStatus::ALL {
            assert_eq!(EffectStatus::try_from(status.code()), Ok(*status));
        }
    }

    #[test]
    fn test_reserved_rotation_status_is_not_named() {
        let status = DailyRotationStatus::try_from(3).unwrap();
        assert_eq!(status, DailyRotationStatus::Reserved3);
        assert!(!status.is_named());
        assert!(DailyRotationStatus::Failed.is_named());
    }

    #[test]
    fn test_code_error_message() {
        let err = WallpaperSetResult::try_from(2).unwrap_err();
        assert_eq!(err.to_string(), "2 is not a valid WallpaperSetResult code");
    }
}
