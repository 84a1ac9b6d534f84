// ── Wire-to-domain conversions ──

use vitrine_api::{ConfigurationResponse, PropertyRecord};

use crate::model::{Configuration, Property};

impl From<PropertyRecord> for Property {
    fn from(record: PropertyRecord) -> Self {
        Self {
            images: record.images,
            extra: record.extra,
        }
    }
}

impl From<ConfigurationResponse> for Configuration {
    fn from(response: ConfigurationResponse) -> Self {
        Self {
            branch_id: response.branch_id,
            tv_id: response.tv_id,
            name: response.name,
            duration: response.duration,
            refresh: response.refresh,
        }
    }
}
