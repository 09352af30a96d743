// labelink/labelink/src/types.rs

use crate::{Error, Result};

/// Print density - Newtype Pattern (valid range 1..=5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density(u8);

impl Density {
    /// Lowest heat setting supported by the firmware.
    pub const MIN: u8 = 1;
    /// Highest heat setting supported by the firmware.
    pub const MAX: u8 = 5;

    /// Validate and wrap a density level.
    pub fn new(level: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&level) {
            return Err(Error::InvalidArgument(format!(
                "density {} outside {}..={}",
                level,
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(level))
    }

    /// The raw wire byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for Density {
    fn default() -> Self {
        // Mid-range heat, safe on every known media type.
        Self(3)
    }
}

/// Label media type as understood by the feed mechanism
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LabelType {
    /// Die-cut labels separated by transparent gaps
    #[default]
    WithGaps = 1,
    /// Continuous media with printed black index marks
    Black = 2,
    /// Continuous media without any index marks
    Continuous = 3,
}

impl LabelType {
    /// The raw wire byte.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for LabelType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::WithGaps),
            2 => Ok(Self::Black),
            3 => Ok(Self::Continuous),
            other => Err(Error::InvalidArgument(format!(
                "label type {} outside 1..=3",
                other
            ))),
        }
    }
}

/// Number of copies for a print job (must be positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quantity(u16);

impl Quantity {
    /// Validate and wrap a copy count.
    pub fn new(count: u16) -> Result<Self> {
        if count == 0 {
            return Err(Error::InvalidArgument("quantity must be positive".into()));
        }
        Ok(Self(count))
    }

    /// The copy count.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(1)
    }
}

/// Keys accepted by the GetInfo command
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfoKey {
    /// Configured print density
    Density = 1,
    /// Configured print speed
    PrintSpeed = 2,
    /// Configured label type
    LabelType = 3,
    /// Firmware language pack
    LanguageType = 6,
    /// Auto shutdown delay setting
    AutoShutdownTime = 7,
    /// Device model code
    DeviceCode = 8,
    /// Firmware version, fixed-point hundredths
    SoftwareVersion = 9,
    /// Battery charge level
    BatteryLevel = 10,
    /// Device serial number
    Serial = 11,
    /// Hardware revision, fixed-point hundredths
    HardwareVersion = 12,
}

impl InfoKey {
    /// The raw wire byte.
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

/// Caller-supplied print job parameters, immutable for the job's lifetime.
///
/// `width` and `height` are the printed pixel dimensions of the label, i.e.
/// the dimensions of the raster after `rotate` has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrintJobConfig {
    /// Printed label width in pixels
    pub width: u16,
    /// Printed label height in pixels
    pub height: u16,
    /// Print density level
    pub density: Density,
    /// Label media type
    pub label_type: LabelType,
    /// Number of copies
    pub quantity: Quantity,
    /// Rotate the source image 90 degrees clockwise before printing
    pub rotate: bool,
    /// Invert ink classification (print light pixels instead of dark)
    pub invert_color: bool,
}

impl PrintJobConfig {
    /// Job config with default density, label type and a single copy.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            density: Density::default(),
            label_type: LabelType::default(),
            quantity: Quantity::default(),
            rotate: false,
            invert_color: false,
        }
    }
}
