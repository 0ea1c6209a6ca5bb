//! Built-in scheme inventory
//!
//! The classic derivation schemes (أوزان) shipped with the crate. `C1`,
//! `C2` and `C3` mark the slots the three root consonants fill; the other
//! tokens are the fixed letters of the scheme.

/// Scheme name and slot pattern pairs, in no particular order.
pub static BUILTIN_SCHEMES: &[(&str, &str)] = &[
    ("فاعل", "C1 ا C2 C3"),
    ("مفعول", "م C1 C2 و C3"),
    ("مفاعل", "م C1 ا C2 C3"),
    ("فعيل", "C1 C2 ي C3"),
    ("فعال", "C1 C2 ا C3"),
    ("مفعال", "م C1 C2 ا C3"),
    ("فعول", "C1 C2 و C3"),
    ("فاعول", "C1 ا C2 و C3"),
    ("تفعيل", "ت C1 C2 ي C3"),
    ("استفعال", "ا س ت C1 C2 C3"),
    ("انفعال", "ا ن C1 C2 C3"),
    ("افتعال", "ا C1 ت C2 C3"),
    ("تفاعل", "ت C1 ا C2 C3"),
    ("تفعل", "ت C1 C2 C3"),
    ("فعلان", "C1 C2 C3 ا ن"),
];
