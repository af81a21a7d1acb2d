//! Process-wide, read-only registries for functions and constants.
//!
//! Both tables are `static` and built at compile time; nothing in the crate
//! mutates them. The sanitizer consults them to decide which alphabetic
//! words may appear at all, the parser to validate names, and the evaluator
//! to dispatch calls and resolve constants.

/// A registered unary real function.
pub struct FunctionDef {
    /// The name the parser resolves.
    pub name:            &'static str,
    /// Whether the argument is an angle. Angle-sensitive functions receive
    /// their argument converted degrees→radians when evaluating in degree
    /// mode; all others never see a conversion.
    pub angle_sensitive: bool,
    /// The real function applied to the evaluated argument.
    pub apply:           fn(f64) -> f64,
}

/// Defines the function registry by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - a string name,
/// - an angle-sensitivity flag,
/// - a function implementing the builtin.
///
/// The macro produces:
/// - `FUNCTION_TABLE` (static table for lookup),
/// - `FUNCTION_NAMES` (public list of registered function names).
macro_rules! function_registry {
    (
        $(
            $name:literal => {
                angle_sensitive: $angle:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static FUNCTION_TABLE: &[FunctionDef] = &[
            $(
                FunctionDef { name: $name, angle_sensitive: $angle, apply: $func },
            )*
        ];
        /// Names of every registered function.
        pub const FUNCTION_NAMES: &[&str] = &[
            $($name,)*
        ];
    };
}

function_registry! {
    "sqrt" => { angle_sensitive: false, func: f64::sqrt },
    "sin"  => { angle_sensitive: true,  func: f64::sin },
    "cos"  => { angle_sensitive: true,  func: f64::cos },
    "tan"  => { angle_sensitive: true,  func: f64::tan },
    "cot"  => { angle_sensitive: true,  func: cot },
    "ln"   => { angle_sensitive: false, func: f64::ln },
    "exp"  => { angle_sensitive: false, func: f64::exp },
}

/// Registered constants and their values.
pub static CONSTANT_TABLE: &[(&str, f64)] = &[
    ("pi", std::f64::consts::PI),
    ("e", std::f64::consts::E),
];

/// The cotangent, defined as `1 / tan(x)`.
///
/// `tan` is a hardware real function and never traps: where the tangent is
/// zero this returns `±inf`, which the top-level result classification
/// reports as overflow. The division-by-zero error is reserved for the `/`
/// operator.
fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

/// Looks a function up by name.
///
/// # Example
/// ```
/// use numeval::interpreter::registry::lookup_function;
///
/// assert!(lookup_function("sin").is_some_and(|def| def.angle_sensitive));
/// assert!(lookup_function("sqrt").is_some_and(|def| !def.angle_sensitive));
/// assert!(lookup_function("sinh").is_none());
/// ```
#[must_use]
pub fn lookup_function(name: &str) -> Option<&'static FunctionDef> {
    FUNCTION_TABLE.iter().find(|def| def.name == name)
}

/// Looks a constant up by name.
///
/// # Example
/// ```
/// use numeval::interpreter::registry::lookup_constant;
///
/// assert_eq!(lookup_constant("pi"), Some(std::f64::consts::PI));
/// assert_eq!(lookup_constant("tau"), None);
/// ```
#[must_use]
pub fn lookup_constant(name: &str) -> Option<f64> {
    CONSTANT_TABLE.iter()
                  .find(|(n, _)| *n == name)
                  .map(|(_, value)| *value)
}

/// Tests whether a word names anything in either registry.
///
/// Used by the sanitizer to reject stray letters before tokenization.
#[must_use]
pub fn is_registered_word(word: &str) -> bool {
    FUNCTION_NAMES.contains(&word) || CONSTANT_TABLE.iter().any(|(n, _)| *n == word)
}
