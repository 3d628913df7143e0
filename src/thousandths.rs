use ufmt::{uDisplay, uWrite, Formatter};
use ufmt_macros::uDebug;

/// Underlying type representing a number of thousandths.
type ThousandthsRepr = i32;

/// Fixed-point decimal with three fractional digits.
///
/// `ufmt` cannot format floats, so every value that leaves the device as
/// text goes through this type.
#[derive(Debug, uDebug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct Thousandths(ThousandthsRepr);
impl Thousandths {
    /// Creates a new `Thousandths`.
    pub fn new(value: ThousandthsRepr) -> Self {
        Self(value)
    }

    /// Converts a float, rounding to the nearest thousandth.
    ///
    /// Out-of-range values saturate; NaN becomes zero.
    pub fn from_f32(value: f32) -> Self {
        Self(libm::roundf(value * 1000.0) as ThousandthsRepr)
    }

    /// Returns the number of thousandths.
    pub fn get_value(&self) -> ThousandthsRepr {
        self.0
    }
}

impl uDisplay for Thousandths {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        // Work in i64 so that i32::MIN has a magnitude.
        let value = self.0 as i64;
        if value < 0 {
            f.write_char('-')?;
        }

        let v = value.abs();
        let int_part = v / 1000;
        let frc_part = v % 1000;

        int_part.fmt(f)?;
        f.write_char('.')?;
        if frc_part < 10 {
            f.write_str("00")?;
        } else if frc_part < 100 {
            f.write_char('0')?;
        }
        frc_part.fmt(f)
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use proptest::prelude::*;

    /// `uWrite` sink backed by a `String`.
    pub struct StringWriter(pub String);
    impl uWrite for StringWriter {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    /// Formats any `uDisplay` value into a `String`.
    pub fn ufmt_string<T: uDisplay>(value: &T) -> String {
        let mut out = StringWriter(String::new());
        ufmt::uwrite!(&mut out, "{}", value).unwrap();
        out.0
    }

    #[test]
    fn test_display_examples() {
        assert_eq!("0.000", ufmt_string(&Thousandths::new(0)));
        assert_eq!("12.000", ufmt_string(&Thousandths::new(12000)));
        assert_eq!("-0.500", ufmt_string(&Thousandths::new(-500)));
        assert_eq!("3.007", ufmt_string(&Thousandths::new(3007)));
        assert_eq!("-1.050", ufmt_string(&Thousandths::new(-1050)));
        assert_eq!("-2147483.648", ufmt_string(&Thousandths::new(i32::MIN)));
    }

    #[test]
    fn test_from_f32_rounds() {
        assert_eq!(Thousandths::new(1235), Thousandths::from_f32(1.2346));
        assert_eq!(Thousandths::new(-1235), Thousandths::from_f32(-1.2346));
        assert_eq!(Thousandths::new(0), Thousandths::from_f32(f32::NAN));
        assert_eq!(Thousandths::new(i32::MAX), Thousandths::from_f32(1.0e12));
    }

    proptest! {
        #[test]
        fn test_display_matches_std(value in -10_000_000i32..10_000_000i32) {
            let expected = format!("{:.3}", value as f64 / 1000.0);
            assert_eq!(expected, ufmt_string(&Thousandths::new(value)));
        }
    }
}
