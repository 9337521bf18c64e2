use core::fmt;
use core::str::FromStr;

/// Default estimated (or fixed) row height in logical pixels.
pub const DEFAULT_ITEM_SIZE: u32 = 40;
/// Default number of buffer rows rendered above and below the viewport.
pub const DEFAULT_BUFFER: usize = 5;

/// Which positioning strategy the engine uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VirtualType {
    /// Rows start at an estimated height and are corrected after they are measured.
    #[default]
    Dynamic,
    /// Every row has the same height; positions are pure arithmetic.
    Fixed,
}

impl VirtualType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for VirtualType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`VirtualType`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseVirtualTypeError {
    _priv: (),
}

impl fmt::Display for ParseVirtualTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown virtual type, expected \"dynamic\" or \"fixed\"")
    }
}

impl core::error::Error for ParseVirtualTypeError {}

impl FromStr for VirtualType {
    type Err = ParseVirtualTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("dynamic") {
            Ok(Self::Dynamic)
        } else if s.eq_ignore_ascii_case("fixed") {
            Ok(Self::Fixed)
        } else {
            Err(ParseVirtualTypeError { _priv: () })
        }
    }
}

/// Configuration for [`crate::RowWindow`].
///
/// Sizes are in logical pixels. A size of `0` is treated as `1` wherever it is used as a divisor.
///
/// With the `serde` feature, size fields deserialize from either a number or its decimal text
/// (`24` or `"24"`), so options can come straight from string-typed host attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WindowOptions {
    pub virtual_type: VirtualType,
    /// Height assumed for rows that have not been measured yet. Also used to derive how many
    /// rows fit in the viewport.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub estimated_item_size: u32,
    /// Row height for [`VirtualType::Fixed`]. Falls back to `estimated_item_size` when unset.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize_option"))]
    pub item_size: Option<u32>,
    /// Extra rows rendered on each side of the viewport.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "lenient::deserialize"))]
    pub buffer: usize,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            virtual_type: VirtualType::Dynamic,
            estimated_item_size: DEFAULT_ITEM_SIZE,
            item_size: None,
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl WindowOptions {
    /// Options for variable-height rows with the given estimate.
    pub fn dynamic(estimated_item_size: u32) -> Self {
        Self {
            estimated_item_size,
            ..Self::default()
        }
    }

    /// Options for rows that all share `item_size`.
    pub fn fixed(item_size: u32) -> Self {
        Self {
            virtual_type: VirtualType::Fixed,
            estimated_item_size: item_size,
            item_size: Some(item_size),
            buffer: DEFAULT_BUFFER,
        }
    }

    pub fn with_virtual_type(mut self, virtual_type: VirtualType) -> Self {
        self.virtual_type = virtual_type;
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: u32) -> Self {
        self.estimated_item_size = estimated_item_size;
        self
    }

    pub fn with_item_size(mut self, item_size: Option<u32>) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }

    /// The per-row size used for range arithmetic: the fixed row height for
    /// [`VirtualType::Fixed`], the estimate otherwise. Never zero.
    pub fn effective_item_size(&self) -> u32 {
        let size = match self.virtual_type {
            VirtualType::Fixed => self.item_size.unwrap_or(self.estimated_item_size),
            VirtualType::Dynamic => self.estimated_item_size,
        };
        size.max(1)
    }

    /// Returns `true` when switching from `prev` to `self` invalidates the position index.
    pub fn requires_rebuild(&self, prev: &WindowOptions) -> bool {
        self.virtual_type != prev.virtual_type
            || self.effective_item_size() != prev.effective_item_size()
    }
}

#[cfg(feature = "serde")]
mod lenient {
    //! Size fields that accept a non-negative integer or its decimal text.

    use core::fmt;
    use core::marker::PhantomData;

    use serde::de::{self, Deserializer, Unexpected, Visitor};

    pub(super) fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        deserializer.deserialize_any(NumberOrText(PhantomData))
    }

    pub(super) fn deserialize_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: TryFrom<u64>,
    {
        deserializer.deserialize_option(OptionalNumberOrText(PhantomData))
    }

    struct NumberOrText<T>(PhantomData<T>);

    impl<'de, T: TryFrom<u64>> Visitor<'de> for NumberOrText<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer or a string holding one")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<T, E> {
            T::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<T, E> {
            let v = u64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))?;
            self.visit_u64(v)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<T, E> {
            // Integral floats only, e.g. `40.0` from a JavaScript number.
            if v >= 0.0 && v < u64::MAX as f64 && (v as u64) as f64 == v {
                self.visit_u64(v as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
            let n = v
                .trim()
                .parse::<u64>()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))?;
            self.visit_u64(n)
        }
    }

    struct OptionalNumberOrText<T>(PhantomData<T>);

    impl<'de, T: TryFrom<u64>> Visitor<'de> for OptionalNumberOrText<T> {
        type Value = Option<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null, a non-negative integer or a string holding one")
        }

        fn visit_none<E: de::Error>(self) -> Result<Option<T>, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Option<T>, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Option<T>, D::Error> {
            deserialize(d).map(Some)
        }

        // Formats without an explicit option marker hand the value over directly.
        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Option<T>, E> {
            NumberOrText(PhantomData).visit_u64(v).map(Some)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Option<T>, E> {
            NumberOrText(PhantomData).visit_i64(v).map(Some)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Option<T>, E> {
            NumberOrText(PhantomData).visit_f64(v).map(Some)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Option<T>, E> {
            NumberOrText(PhantomData).visit_str(v).map(Some)
        }
    }
}
