//! Chapter 2: literals, declarations, constants and conversions.

use std::fmt;
use std::io::Write;
use std::ops::{Add, Div, Mul, Sub};

use super::LessonResult;
use crate::config::CourseConfig;
use crate::narrate::Narrator;

#[allow(clippy::approx_constant)]
const PI: f64 = 3.1415;
const ID_KEY: &str = "id";
const NAME_KEY: &str = "name";
const TOTAL: i64 = 20 * 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Complex { re, im }
    }

    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

pub fn run<W: Write>(n: &mut Narrator<W>, _config: &CourseConfig) -> LessonResult {
    n.section("Example of Integer Literals")?;
    n.line("age", 45)?;
    n.line("blue", 0x0000ff)?;
    n.line("admin", 0o777)?;
    n.line("billion", 1_000_000_000)?;
    n.line("red", 0xff_00_00)?;
    n.blank()?;

    n.section("Example of Float Literals")?;
    n.line("length", 24.68_f32)?;
    n.line("avogadro", 6.2214e23_f64)?;
    // 0x12.34p5
    n.line("hexaFloat", (0x12 as f64 + 0x34 as f64 / 256.0) * 2f64.powi(5))?;
    n.line("bankBalance", 10_314.56_f64)?;
    n.blank()?;

    n.section("Example of Rune Literals")?;
    n.line("gender", u32::from('M'))?;
    n.line("newline", u32::from('\n'))?;
    n.line("tab", u32::from('\t'))?;
    n.line("quote", u32::from('\''))?;
    for ninety_seven in ['\x61', '\u{0061}', '\u{000061}'] {
        n.line("ninetySeven", u32::from(ninety_seven))?;
    }
    n.blank()?;

    n.section("Example of String Literals")?;
    n.line("greetings", "Hello World!")?;
    n.line("greetingsLong", "Greetings and \n\"Salutations\"!")?;
    n.line("sysPath", "C:\\\\Windows\\System32")?;
    n.line("greetingsRaw", r#"Greetings and
    "Salutations"!"#)?;
    n.blank()?;

    n.section("Example of Boolean")?;
    let flag = bool::default();
    n.line("flag", flag)?;
    n.line("isAdult", true)?;
    n.blank()?;

    n.section("Example of Complex Number")?;
    let x = Complex::new(2.5, 3.1);
    let y = Complex::new(10.2, 2.0);
    n.line("x", x)?;
    n.line("y", y)?;
    n.line("x + y", x + y)?;
    n.line("x - y", x - y)?;
    n.line("x * y", x * y)?;
    n.line("x / y", x / y)?;
    n.line("real(x)", x.re)?;
    n.line("imag(x)", x.im)?;
    n.line("abs(x)", x.abs())?;
    n.blank()?;

    n.section("Example of Type Conversion")?;
    let my_int: i64 = 10;
    let my_float: f64 = 30.2;
    n.text(format!("{my_int} + {my_float:.1}"))?;
    n.line("mySumF", my_int as f64 + my_float)?;
    n.line("mySumI", my_int + my_float as i64)?;
    n.blank()?;

    n.section("Example of Variable Declarations")?;
    let (s_name, s_age) = ("John", 15);
    n.line("sName", s_name)?;
    n.line("sAge", s_age)?;
    // Shadowing rebinds; the earlier values are gone from here on.
    let (s_name, s_age, s_is_adult) = ("Johnny", 26, true);
    n.line("sName", s_name)?;
    n.line("sAge", s_age)?;
    n.line("sIsAdult", s_is_adult)?;
    n.blank()?;

    n.section("Example of Package-level Constants")?;
    n.line("pi", PI)?;
    n.line("idKey", ID_KEY)?;
    n.line("nameKey", NAME_KEY)?;
    n.line("total", TOTAL)?;
    n.blank()?;

    Ok(())
}
