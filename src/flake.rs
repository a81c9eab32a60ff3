#[cfg(not(feature = "std"))]
use core as std;

use crate::{
    HASH_MASK, MAX_RANDOM_BITS, MAX_TIMESTAMP_FIELD, RANDOM_BITS, RANDOM_SHIFT, TIMESTAMP_BITS,
    TIMESTAMP_SHIFT,
};
use fstr::FStr;
use std::{error, fmt, str};

/// Represents a simpleflake and provides field accessors, converters, and comparison operators.
///
/// # Examples
///
/// ```rust
/// use simpleflake::{Flake, DEFAULT_EPOCH};
///
/// let x = Flake::from_timestamp(946702801.0, 5, DEFAULT_EPOCH);
/// assert_eq!(x.to_u64(), 8388608005);
/// assert_eq!(x.timestamp_field(), 1000);
/// assert_eq!(x.random_bits(), 5);
///
/// let y = "8388608005".parse::<Flake>()?;
/// assert_eq!(x, y);
/// # Ok::<(), simpleflake::ParseError>(())
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Flake(u64);

impl Flake {
    /// Creates an object from a 64-bit unsigned integer.
    pub const fn from_u64(int_value: u64) -> Self {
        Self(int_value)
    }

    /// Returns the 64-bit unsigned integer representation.
    pub const fn to_u64(self) -> u64 {
        self.0
    }

    /// Creates an object from an 8-byte big-endian byte array.
    pub const fn from_bytes(array_value: [u8; 8]) -> Self {
        Self(u64::from_be_bytes(array_value))
    }

    /// Returns the big-endian byte array representation.
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0.to_be_bytes()
    }

    /// Creates an object from field values using plain integer arithmetic.
    ///
    /// No range check is performed: bits of `timestamp_field` beyond the 41-bit field are
    /// shifted out, and a `random_bits` value of 2^23 or greater carries into the
    /// `timestamp` field. Use [`Flake::try_from_fields`] to reject such inputs.
    pub const fn from_fields(timestamp_field: u64, random_bits: u32) -> Self {
        Self(
            (timestamp_field << TIMESTAMP_SHIFT)
                .wrapping_add((random_bits as u64) << RANDOM_SHIFT),
        )
    }

    /// Creates an object from field values, failing if any argument is out of the value range
    /// of the field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleflake::Flake;
    ///
    /// assert!(Flake::try_from_fields(1000, 5).is_ok());
    /// assert!(Flake::try_from_fields(1 << 41, 5).is_err());
    /// assert!(Flake::try_from_fields(1000, 1 << 23).is_err());
    /// ```
    pub const fn try_from_fields(
        timestamp_field: u64,
        random_bits: u32,
    ) -> Result<Self, FieldError> {
        if timestamp_field > MAX_TIMESTAMP_FIELD {
            Err(FieldError::timestamp_out_of_range())
        } else if random_bits > MAX_RANDOM_BITS {
            Err(FieldError::random_bits_out_of_range(random_bits))
        } else {
            Ok(Self::from_fields(timestamp_field, random_bits))
        }
    }

    /// Creates an object from a timestamp in seconds since the Unix epoch, a random value, and
    /// an epoch in seconds since the Unix epoch.
    ///
    /// The elapsed time is converted to milliseconds and truncated toward zero. A timestamp
    /// earlier than `epoch` yields a negative elapsed time that wraps around in two's
    /// complement, and an out-of-range `random_bits` bleeds into the `timestamp` field; see
    /// [`Flake::try_from_timestamp`] for the checked counterpart.
    pub fn from_timestamp(timestamp: f64, random_bits: u32, epoch: f64) -> Self {
        // `as` truncates toward zero and saturates at the i64 bounds (NaN becomes zero)
        let elapsed_ms = ((timestamp - epoch) * 1000.0) as i64;
        Self::from_fields(elapsed_ms as u64, random_bits)
    }

    /// Creates an object from a timestamp, a random value, and an epoch, failing if the
    /// elapsed milliseconds or the random value do not fit their fields.
    pub fn try_from_timestamp(
        timestamp: f64,
        random_bits: u32,
        epoch: f64,
    ) -> Result<Self, FieldError> {
        let elapsed_ms = (timestamp - epoch) * 1000.0;
        if !(0.0..(MAX_TIMESTAMP_FIELD + 1) as f64).contains(&elapsed_ms) {
            return Err(FieldError::timestamp_out_of_range());
        }
        Self::try_from_fields(elapsed_ms as u64, random_bits)
    }

    /// Returns the 41-bit `timestamp` field value, i.e., milliseconds since the epoch.
    pub const fn timestamp_field(&self) -> u64 {
        extract_bits(self.0, TIMESTAMP_SHIFT, TIMESTAMP_BITS)
    }

    /// Returns the 23-bit `random` field value.
    pub const fn random_bits(&self) -> u32 {
        extract_bits(self.0, RANDOM_SHIFT, RANDOM_BITS) as u32
    }

    /// Returns the 12-bit consistent-hash id.
    pub const fn consistent_hash_id(&self) -> u16 {
        (self.0 & HASH_MASK) as u16
    }

    /// Returns a copy of this object whose low 12 bits are replaced by `hash_id`.
    ///
    /// Bits of `hash_id` above the 12-bit width are ignored.
    pub const fn with_consistent_hash_id(self, hash_id: u16) -> Self {
        Self((self.0 & !HASH_MASK) | (hash_id as u64 & HASH_MASK))
    }

    /// Returns the timestamp in seconds since the Unix epoch, at millisecond resolution.
    pub fn timestamp(&self, epoch: f64) -> f64 {
        epoch + self.timestamp_field() as f64 / 1000.0
    }

    /// Decodes this object into its timestamp and random components.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleflake::{Flake, DEFAULT_EPOCH};
    ///
    /// let parsed = Flake::from_u64(8388608005).parse(DEFAULT_EPOCH);
    /// assert_eq!(parsed.timestamp, 946702801.0);
    /// assert_eq!(parsed.random_bits, 5);
    /// ```
    pub fn parse(&self, epoch: f64) -> ParsedFlake {
        ParsedFlake {
            timestamp: self.timestamp(epoch),
            random_bits: self.random_bits(),
        }
    }

    /// Creates an object from a decimal string representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleflake::Flake;
    ///
    /// let x = Flake::try_from_str("3656838924387229981")?;
    /// let y = "3656838924387229981".parse::<Flake>()?;
    /// assert_eq!(x, y);
    /// # Ok::<(), simpleflake::ParseError>(())
    /// ```
    pub const fn try_from_str(str_value: &str) -> Result<Self, ParseError> {
        let bs = str_value.as_bytes();
        if bs.is_empty() {
            return Err(ParseError::empty());
        }

        let mut int_value = 0u64;
        let mut i = 0;
        while i < bs.len() {
            if !bs[i].is_ascii_digit() {
                return Err(ParseError::invalid_digit(str_value, i));
            }
            int_value = match int_value.checked_mul(10) {
                Some(int_value) => match int_value.checked_add((bs[i] - b'0') as u64) {
                    Some(int_value) => int_value,
                    _ => return Err(ParseError::out_of_u64_range()),
                },
                _ => return Err(ParseError::out_of_u64_range()),
            };
            i += 1;
        }
        Ok(Self(int_value))
    }

    /// Returns the 64-digit zero-padded binary representation stored in a stack-allocated
    /// string-like type.
    ///
    /// Use the `{:b}` format specifier for the unpadded form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use simpleflake::Flake;
    ///
    /// let x = Flake::from_fields(1, 5);
    /// assert_eq!(
    ///     x.to_binary(),
    ///     "0000000000000000000000000000000000000000100000000000000000000101"
    /// );
    /// assert_eq!(format!("{:b}", x), "100000000000000000000101");
    /// ```
    pub const fn to_binary(&self) -> FStr<64> {
        let mut dst = [b'0'; 64];
        let mut i = 0;
        while i < 64 {
            dst[63 - i] = b'0' + ((self.0 >> i) & 1) as u8;
            i += 1;
        }

        // SAFETY: All bytes in `dst` are ASCII '0' or '1'.
        unsafe { FStr::from_inner_unchecked(dst) }
    }
}

impl From<u64> for Flake {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Flake> for u64 {
    fn from(object: Flake) -> Self {
        object.to_u64()
    }
}

impl From<[u8; 8]> for Flake {
    /// Creates an object from an 8-byte big-endian byte array.
    fn from(value: [u8; 8]) -> Self {
        Self::from_bytes(value)
    }
}

impl From<Flake> for [u8; 8] {
    /// Returns the big-endian byte array representation.
    fn from(object: Flake) -> Self {
        object.to_bytes()
    }
}

impl str::FromStr for Flake {
    type Err = ParseError;

    /// Creates an object from a decimal string representation.
    fn from_str(str_value: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(str_value)
    }
}

impl fmt::Display for Flake {
    /// Returns the decimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Binary for Flake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

/// The timestamp and random components decoded from a simpleflake.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct ParsedFlake {
    /// Seconds since the Unix epoch, at millisecond resolution.
    pub timestamp: f64,

    /// The 23-bit `random` field value.
    pub random_bits: u32,
}

/// Decodes a simpleflake into its timestamp and random components.
///
/// This function never fails; every 64-bit value decodes to some timestamp and random value.
///
/// # Examples
///
/// ```rust
/// let parsed = simpleflake::parse(8388608005, 946702800.0);
/// assert_eq!(parsed.timestamp, 946702801.0);
/// assert_eq!(parsed.random_bits, 5);
/// ```
pub fn parse(flake: u64, epoch: f64) -> ParsedFlake {
    Flake::from_u64(flake).parse(epoch)
}

/// Extracts the 12-bit consistent-hash id from a simpleflake.
pub const fn consistent_hash_id(flake: u64) -> u16 {
    Flake::from_u64(flake).consistent_hash_id()
}

/// Extracts `length` bits of `data` starting at bit `shift` (counted from the least
/// significant bit).
///
/// # Examples
///
/// ```rust
/// use simpleflake::extract_bits;
///
/// assert_eq!(extract_bits(0b1011_0000, 4, 3), 0b011);
/// assert_eq!(extract_bits(u64::MAX, 0, 64), u64::MAX);
/// ```
pub const fn extract_bits(data: u64, shift: u32, length: u32) -> u64 {
    let shifted = if shift < u64::BITS { data >> shift } else { 0 };
    if length < u64::BITS {
        shifted & ((1 << length) - 1)
    } else {
        shifted
    }
}

/// An error parsing an invalid string representation of simpleflake.
#[derive(Clone, Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum ParseErrorKind {
    Empty,
    InvalidDigit {
        /// Holds the invalid character as a UTF-8 byte array to work in the const context.
        utf8_char: [u8; 4],
        position: usize,
    },
    OutOfU64Range,
}

impl ParseError {
    /// Creates an `Empty` variant.
    const fn empty() -> Self {
        Self {
            kind: ParseErrorKind::Empty,
        }
    }

    /// Creates an `InvalidDigit` variant from the entire string and the position of invalid digit.
    const fn invalid_digit(src: &str, position: usize) -> Self {
        const fn is_char_boundary(utf8_bytes: &[u8], index: usize) -> bool {
            match index {
                0 => true,
                i if i < utf8_bytes.len() => (utf8_bytes[i] as i8) >= -64,
                _ => index == utf8_bytes.len(),
            }
        }

        let bs = src.as_bytes();
        let mut utf8_char = [bs[position], 0, 0, 0];

        let mut i = 1;
        while i < 4 && !is_char_boundary(bs, position + i) {
            utf8_char[i] = bs[position + i];
            i += 1;
        }

        Self {
            kind: ParseErrorKind::InvalidDigit {
                utf8_char,
                position,
            },
        }
    }

    /// Creates an `OutOfU64Range` variant.
    const fn out_of_u64_range() -> Self {
        Self {
            kind: ParseErrorKind::OutOfU64Range,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not parse string as simpleflake: ")?;
        match self.kind {
            ParseErrorKind::Empty => write!(f, "empty string"),
            ParseErrorKind::InvalidDigit {
                utf8_char,
                position,
            } => match str::from_utf8(&utf8_char).ok().and_then(|s| s.chars().next()) {
                Some(chr) => write!(f, "invalid digit '{}' at {}", chr.escape_debug(), position),
                None => write!(f, "invalid digit at {}", position),
            },
            ParseErrorKind::OutOfU64Range => write!(f, "out of 64-bit value range"),
        }
    }
}

impl error::Error for ParseError {}

/// An error creating a simpleflake from field values that do not fit their fields.
#[derive(Clone, Debug)]
pub struct FieldError {
    kind: FieldErrorKind,
}

#[derive(Clone, Eq, PartialEq, Debug)]
enum FieldErrorKind {
    TimestampOutOfRange,
    RandomBitsOutOfRange { random_bits: u32 },
}

impl FieldError {
    /// Creates a `TimestampOutOfRange` variant.
    const fn timestamp_out_of_range() -> Self {
        Self {
            kind: FieldErrorKind::TimestampOutOfRange,
        }
    }

    /// Creates a `RandomBitsOutOfRange` variant from the rejected value.
    const fn random_bits_out_of_range(random_bits: u32) -> Self {
        Self {
            kind: FieldErrorKind::RandomBitsOutOfRange { random_bits },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid simpleflake field value: ")?;
        match self.kind {
            FieldErrorKind::TimestampOutOfRange => write!(
                f,
                "elapsed time out of {}-bit millisecond range",
                TIMESTAMP_BITS
            ),
            FieldErrorKind::RandomBitsOutOfRange { random_bits } => write!(
                f,
                "random bits {} out of {}-bit range",
                random_bits, RANDOM_BITS
            ),
        }
    }
}

impl error::Error for FieldError {}

#[cfg(feature = "std")]
mod with_std {
    use super::{Flake, ParseError};

    impl TryFrom<String> for Flake {
        type Error = ParseError;

        fn try_from(value: String) -> Result<Self, Self::Error> {
            Self::try_from_str(&value)
        }
    }

    impl From<Flake> for String {
        fn from(object: Flake) -> Self {
            object.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{consistent_hash_id, extract_bits, parse, Flake};
    use crate::{DEFAULT_EPOCH, HASH_MASK, MAX_RANDOM_BITS, MAX_TIMESTAMP_FIELD};

    /// Packs and unpacks the reference vector
    #[test]
    fn packs_and_unpacks_the_reference_vector() {
        let x = Flake::from_timestamp(946702801.0, 5, 946702800.0);
        assert_eq!(x.to_u64(), 8388608005);
        assert_eq!(x.to_u64(), (1000 << 23) | 5);

        let parsed = parse(8388608005, 946702800.0);
        assert_eq!(parsed.timestamp, 946702801.0);
        assert_eq!(parsed.random_bits, 5);
        assert_eq!(consistent_hash_id(8388608005), 5);
    }

    /// Decodes prepared cases correctly
    #[test]
    fn decodes_prepared_cases_correctly() {
        let cases: &[(u64, (u64, u32, u16))] = &[
            (0, (0, 0, 0)),
            (u64::MAX, (MAX_TIMESTAMP_FIELD, MAX_RANDOM_BITS, 0xfff)),
            (MAX_RANDOM_BITS as u64, (0, MAX_RANDOM_BITS, 0xfff)),
            (1 << 23, (1, 0, 0)),
            (!(MAX_RANDOM_BITS as u64), (MAX_TIMESTAMP_FIELD, 0, 0)),
            (0x1000, (0, 0x1000, 0)),
            (0x0123_4567_89ab_cdef, (0x0123_4567_89ab_cdef >> 23, 0x2b_cdef, 0xdef)),
        ];

        for &(int_value, (timestamp_field, random_bits, hash_id)) in cases {
            let e = Flake::from_u64(int_value);
            assert_eq!(e.timestamp_field(), timestamp_field);
            assert_eq!(e.random_bits(), random_bits);
            assert_eq!(e.consistent_hash_id(), hash_id);
            assert_eq!(Flake::from_fields(timestamp_field, random_bits), e);
            assert_eq!(Flake::try_from_fields(timestamp_field, random_bits).unwrap(), e);
        }
    }

    /// Keeps parsed fields within their bit widths
    #[test]
    fn keeps_parsed_fields_within_their_bit_widths() {
        let mut x = 0x9e37_79b9_7f4a_7c15u64;
        for _ in 0..10_000 {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let e = Flake::from_u64(x);
            assert!(e.random_bits() <= MAX_RANDOM_BITS);
            assert!(e.timestamp_field() <= MAX_TIMESTAMP_FIELD);
            assert_eq!(consistent_hash_id(x) as u64, x & HASH_MASK);
            assert!(consistent_hash_id(x) <= 4095);
            assert_eq!(parse(x, 0.0).random_bits, e.random_bits());
        }
    }

    /// Round-trips timestamps at millisecond resolution
    #[test]
    fn round_trips_timestamps_at_millisecond_resolution() {
        let cases = [
            (DEFAULT_EPOCH, 0u32),
            (DEFAULT_EPOCH + 0.0009, 1),
            (DEFAULT_EPOCH + 0.001, MAX_RANDOM_BITS),
            (1_700_000_000.123_4, 0x7f_ffff),
            (1_234_567_890.5, 0x2a),
        ];

        for (timestamp, random_bits) in cases {
            let parsed = Flake::from_timestamp(timestamp, random_bits, DEFAULT_EPOCH)
                .parse(DEFAULT_EPOCH);
            let expected = DEFAULT_EPOCH
                + (((timestamp - DEFAULT_EPOCH) * 1000.0) as u64) as f64 / 1000.0;
            assert_eq!(parsed.random_bits, random_bits);
            assert!((parsed.timestamp - expected).abs() < 1e-6);
        }
    }

    /// Honors a custom epoch
    #[test]
    fn honors_a_custom_epoch() {
        let x = Flake::from_timestamp(10.5, 7, 10.0);
        assert_eq!(x.timestamp_field(), 500);
        assert_eq!(x.parse(10.0).timestamp, 10.5);
        assert_eq!(x.parse(0.0).timestamp, 0.5);
    }

    /// Wraps around for pre-epoch timestamps and bleeds oversized random bits
    #[test]
    fn wraps_around_for_pre_epoch_timestamps_and_bleeds_oversized_random_bits() {
        let x = Flake::from_timestamp(DEFAULT_EPOCH - 1.0, 0, DEFAULT_EPOCH);
        assert_eq!(x.to_u64(), (-1000i64 as u64) << 23);

        let y = Flake::from_timestamp(DEFAULT_EPOCH + 1.0, 1 << 23, DEFAULT_EPOCH);
        assert_eq!(y.timestamp_field(), 1001);
        assert_eq!(y.random_bits(), 0);

        assert!(Flake::try_from_timestamp(DEFAULT_EPOCH - 1.0, 0, DEFAULT_EPOCH).is_err());
        assert!(Flake::try_from_timestamp(DEFAULT_EPOCH + 1.0, 1 << 23, DEFAULT_EPOCH).is_err());
        assert!(Flake::try_from_timestamp(f64::NAN, 0, DEFAULT_EPOCH).is_err());
        assert!(Flake::try_from_timestamp(f64::INFINITY, 0, DEFAULT_EPOCH).is_err());
        assert_eq!(
            Flake::try_from_timestamp(DEFAULT_EPOCH + 1.0, 5, DEFAULT_EPOCH).unwrap(),
            Flake::from_u64(8388608005)
        );
    }

    /// Returns field errors for out-of-range values
    #[test]
    fn returns_field_errors_for_out_of_range_values() {
        use super::FieldErrorKind::*;

        let cases = [
            ((MAX_TIMESTAMP_FIELD + 1, 0), TimestampOutOfRange),
            ((u64::MAX, 0), TimestampOutOfRange),
            (
                (0, MAX_RANDOM_BITS + 1),
                RandomBitsOutOfRange {
                    random_bits: MAX_RANDOM_BITS + 1,
                },
            ),
            (
                (0, u32::MAX),
                RandomBitsOutOfRange {
                    random_bits: u32::MAX,
                },
            ),
        ];

        for ((timestamp_field, random_bits), kind) in cases {
            let result = Flake::try_from_fields(timestamp_field, random_bits);
            assert_eq!(result.unwrap_err().kind, kind);
        }
    }

    /// Replaces the consistent-hash id only
    #[test]
    fn replaces_the_consistent_hash_id_only() {
        let x = Flake::from_u64(0xffff_ffff_ffff_f000);
        assert_eq!(x.with_consistent_hash_id(0xabc).to_u64(), 0xffff_ffff_ffff_fabc);
        assert_eq!(x.with_consistent_hash_id(0xfabc).to_u64(), 0xffff_ffff_ffff_fabc);

        let y = Flake::from_u64(0x0123);
        assert_eq!(y.with_consistent_hash_id(0).to_u64(), 0);
    }

    /// Extracts arbitrary bit ranges
    #[test]
    fn extracts_arbitrary_bit_ranges() {
        assert_eq!(extract_bits(0xabcd, 4, 8), 0xbc);
        assert_eq!(extract_bits(0xabcd, 0, 0), 0);
        assert_eq!(extract_bits(u64::MAX, 63, 1), 1);
        assert_eq!(extract_bits(u64::MAX, 64, 8), 0);
        assert_eq!(extract_bits(u64::MAX, 23, 41), MAX_TIMESTAMP_FIELD);
    }

    /// Renders 64-digit binary representation
    #[test]
    fn renders_64_digit_binary_representation() {
        let re = regex::Regex::new(r"^[01]{64}$").unwrap();
        let cases = [0, 1, 8388608005, u64::MAX, 1 << 63];
        for int_value in cases {
            let e = Flake::from_u64(int_value);
            let binary = e.to_binary();
            assert!(re.is_match(&binary));
            assert_eq!(u64::from_str_radix(&binary, 2).unwrap(), int_value);
            #[cfg(feature = "std")]
            assert_eq!(binary, format!("{:064b}", int_value).as_str());
        }
    }

    /// Returns error if an invalid string representation is supplied
    #[test]
    fn returns_error_if_an_invalid_string_representation_is_supplied() {
        use super::ParseErrorKind::{self, *};
        fn invalid_digit(c: char, position: usize) -> ParseErrorKind {
            let mut utf8_char = [0u8; 4];
            c.encode_utf8(&mut utf8_char);
            InvalidDigit {
                utf8_char,
                position,
            }
        }

        let cases = [
            ("", Empty),
            (" 8388608005", invalid_digit(' ', 0)),
            ("8388608005 ", invalid_digit(' ', 10)),
            ("+8388608005", invalid_digit('+', 0)),
            ("-8388608005", invalid_digit('-', 0)),
            ("83886_08005", invalid_digit('_', 5)),
            ("0x1f", invalid_digit('x', 1)),
            ("8388漢608005", invalid_digit('漢', 4)),
            ("🤣", invalid_digit('🤣', 0)),
            ("18446744073709551616", OutOfU64Range),
            ("99999999999999999999999", OutOfU64Range),
        ];

        for e in cases {
            let result = e.0.parse::<Flake>();
            assert!(result.is_err());
            assert_eq!(result.unwrap_err().kind, e.1);
        }

        assert_eq!(
            "18446744073709551615".parse::<Flake>().unwrap().to_u64(),
            u64::MAX
        );
        assert_eq!("0000000000000000000005".parse::<Flake>().unwrap().to_u64(), 5);
    }

    /// Has symmetric converters from/to various values
    #[test]
    fn has_symmetric_converters_from_to_various_values() {
        let cases = [
            Flake::from_u64(0),
            Flake::from_u64(u64::MAX),
            Flake::from_fields(MAX_TIMESTAMP_FIELD, 0),
            Flake::from_fields(0, MAX_RANDOM_BITS),
            Flake::from_u64(8388608005),
        ];

        for e in cases {
            assert_eq!(Flake::from_u64(e.to_u64()), e);
            assert_eq!(Flake::from(u64::from(e)), e);
            assert_eq!(Flake::from_bytes(e.to_bytes()), e);
            assert_eq!(Flake::from(<[u8; 8]>::from(e)), e);
            assert_eq!(Flake::from_fields(e.timestamp_field(), e.random_bits()), e);
            #[cfg(feature = "std")]
            assert_eq!(e.to_string().parse::<Flake>().unwrap(), e);
            #[cfg(feature = "std")]
            assert_eq!(Flake::try_from(String::from(e)).unwrap(), e);
        }
    }

    /// Orders by timestamp first
    #[test]
    fn orders_by_timestamp_first() {
        let ordered = [
            Flake::from_fields(0, 0),
            Flake::from_fields(0, 1),
            Flake::from_fields(0, MAX_RANDOM_BITS),
            Flake::from_fields(1, 0),
            Flake::from_fields(2, 0),
            Flake::from_fields(MAX_TIMESTAMP_FIELD, 0),
        ];

        let mut prev = &ordered[0];
        for curr in &ordered[1..] {
            assert_ne!(curr, prev);
            assert!(curr > prev);
            assert!(prev < curr);
            assert!(curr.timestamp_field() >= prev.timestamp_field());
            prev = curr;
        }
    }
}

#[cfg(feature = "serde")]
mod with_serde {
    use super::{fmt, str, Flake};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Flake {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.collect_str(self)
            } else {
                serializer.serialize_u64(self.to_u64())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Flake {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_u64(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl de::Visitor<'_> for VisitorImpl {
        type Value = Flake;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a simpleflake representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Self::Value::try_from_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            match <[u8; 8]>::try_from(value) {
                Ok(array_value) => Ok(Self::Value::from_bytes(array_value)),
                Err(err) => match str::from_utf8(value) {
                    Ok(str_value) => self.visit_str(str_value),
                    _ => Err(de::Error::custom(err)),
                },
            }
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Self::Value::from_u64(value))
        }
    }

}
