use super::{ComponentKind, VariantProjector};
use crate::coerce::{as_float, as_int, Field};
use crate::error::Result;
use crate::selector::resolve_scope;
use crate::tree::NodeRef;
use serde::Serialize;

/// Numeric properties of a `Number Slider`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderProperties {
    /// Decimal places shown
    pub digits: i32,
    pub grip_display: i32,
    pub interval: i32,
    pub min: f64,
    pub max: f64,
    pub snap_count: i32,
    /// Current slider value
    pub value: f64,
}

const SCOPE: &str = "Container//Slider";

const DIGITS: Field<i32> = Field::required("digits", "Digits", as_int);
const GRIP_DISPLAY: Field<i32> = Field::required("grip_display", "GripDisplay", as_int);
const INTERVAL: Field<i32> = Field::required("interval", "Interval", as_int);
const MIN: Field<f64> = Field::required("min", "Min", as_float);
const MAX: Field<f64> = Field::required("max", "Max", as_float);
const SNAP_COUNT: Field<i32> = Field::required("snap_count", "SnapCount", as_int);
const VALUE: Field<f64> = Field::required("value", "Value", as_float);

pub struct SliderProjector;

impl SliderProjector {
    pub const NAME: &'static str = "Number Slider";

    fn properties(scope: NodeRef<'_>) -> Result<SliderProperties> {
        Ok(SliderProperties {
            digits: DIGITS.take(scope)?,
            grip_display: GRIP_DISPLAY.take(scope)?,
            interval: INTERVAL.take(scope)?,
            min: MIN.take(scope)?,
            max: MAX.take(scope)?,
            snap_count: SNAP_COUNT.take(scope)?,
            value: VALUE.take(scope)?,
        })
    }
}

impl VariantProjector for SliderProjector {
    fn project(&self, root: NodeRef<'_>) -> Result<ComponentKind> {
        let scope = resolve_scope(root, &SCOPE.parse()?)?;
        let properties = Self::properties(scope).map_err(|e| e.under(SCOPE))?;
        Ok(ComponentKind::NumericSlider(properties))
    }
}
