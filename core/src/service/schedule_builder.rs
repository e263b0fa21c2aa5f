use std::collections::BTreeMap;

use crate::error::ScheduleError;
use crate::model::schedule::{ScheduleStructure, WeeklyScheduleConfig};
use crate::time::{day_name, generate_slots, DAYS};

/// Builds the weekly slot grid. The fallback config is used whenever the
/// caller has none of its own.
pub struct ScheduleBuilder {
    fallback: WeeklyScheduleConfig,
}

impl ScheduleBuilder {
    pub fn new(fallback: WeeklyScheduleConfig) -> Self {
        Self { fallback }
    }

    /// Resolves which config applies: the caller's, else the fallback.
    pub fn effective<'a>(
        &'a self,
        config: Option<&'a WeeklyScheduleConfig>,
    ) -> &'a WeeklyScheduleConfig {
        config.unwrap_or(&self.fallback)
    }

    /// Days without both bounds are left out entirely. Days whose window
    /// produces no slots are kept with an empty list.
    pub fn build(
        &self,
        config: Option<&WeeklyScheduleConfig>,
    ) -> Result<ScheduleStructure, ScheduleError> {
        let config = self.effective(config);
        if config.slot_duration_minutes == 0 {
            return Err(ScheduleError::ZeroSlotDuration);
        }

        let mut days = BTreeMap::new();
        for day in 0..DAYS.len() as u8 {
            let Some(hours) = config.schedule.get(&day).filter(|h| h.is_open()) else {
                continue;
            };

            let slots = generate_slots(
                hours.open.as_deref(),
                hours.close.as_deref(),
                config.slot_duration_minutes,
            )
            .map_err(|e| match e {
                ScheduleError::InvalidTime(value) => ScheduleError::InvalidDayHours {
                    day,
                    day_name: day_name(day).unwrap_or("unknown day"),
                    value,
                },
                other => other,
            })?;

            tracing::debug!(day, slots = slots.len(), "generated day slots");
            days.insert(day, slots);
        }

        Ok(ScheduleStructure::new(days))
    }
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new(WeeklyScheduleConfig::default())
    }
}
