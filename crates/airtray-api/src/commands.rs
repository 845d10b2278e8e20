//! Write-side command encoding
//!
//! The settings endpoint takes exactly one form-urlencoded field per
//! request. Power and swing share the `button` field through sentinel
//! values — an external protocol convention, preserved as-is.

/// `button` value that turns the appliance on.
pub const BUTTON_POWER_ON: &str = "";
/// `button` value that turns the appliance off.
pub const BUTTON_POWER_OFF: &str = "power-off";
/// `button` value that toggles the louver swing.
pub const BUTTON_SWING: &str = "airdir-swing";

/// One discrete write against the appliance's settings endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirconSetting {
    Power(bool),
    Mode(String),
    Temperature(String),
    Volume(String),
    Swing,
}

impl AirconSetting {
    /// The form field this setting is posted under.
    pub fn field(&self) -> &'static str {
        match self {
            AirconSetting::Power(_) | AirconSetting::Swing => "button",
            AirconSetting::Mode(_) => "operation_mode",
            AirconSetting::Temperature(_) => "temperature",
            AirconSetting::Volume(_) => "air_volume",
        }
    }

    /// The form value this setting is posted with.
    pub fn value(&self) -> &str {
        match self {
            AirconSetting::Power(true) => BUTTON_POWER_ON,
            AirconSetting::Power(false) => BUTTON_POWER_OFF,
            AirconSetting::Swing => BUTTON_SWING,
            AirconSetting::Mode(v)
            | AirconSetting::Temperature(v)
            | AirconSetting::Volume(v) => v,
        }
    }

    /// Short description for logging.
    pub fn describe(&self) -> String {
        format!("{}={}", self.field(), self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_uses_button_sentinels() {
        let on = AirconSetting::Power(true);
        assert_eq!(on.field(), "button");
        assert_eq!(on.value(), "");

        let off = AirconSetting::Power(false);
        assert_eq!(off.field(), "button");
        assert_eq!(off.value(), "power-off");
    }

    #[test]
    fn test_swing_uses_button_sentinel() {
        let swing = AirconSetting::Swing;
        assert_eq!(swing.field(), "button");
        assert_eq!(swing.value(), "airdir-swing");
    }

    #[test]
    fn test_value_fields_pass_through() {
        assert_eq!(AirconSetting::Mode("cool".into()).field(), "operation_mode");
        assert_eq!(AirconSetting::Mode("cool".into()).value(), "cool");
        assert_eq!(
            AirconSetting::Temperature("26".into()).field(),
            "temperature"
        );
        assert_eq!(AirconSetting::Volume("3".into()).field(), "air_volume");
        assert_eq!(AirconSetting::Volume("3".into()).value(), "3");
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            AirconSetting::Volume("3".into()).describe(),
            "air_volume=3"
        );
        assert_eq!(AirconSetting::Power(false).describe(), "button=power-off");
    }
}
