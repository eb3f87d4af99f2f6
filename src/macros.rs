// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literal, const or var
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Enum whose serialized form is the variant name (or the `= "Name"` override).
///
/// Generates `ALL`, `name()` and a case-insensitive `lookup()` that returns
/// `None` on a miss. Callers decide the fallback.
#[macro_export]
macro_rules! symbolic_enum {
    (@name $variant:ident $sym:literal) => { $sym };
    (@name $variant:ident) => { stringify!($variant) };
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident $(= $sym:literal)?),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name { $($(#[serde(rename = $sym)])? $variant),+ }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(self) -> &'static str {
                match self { $($name::$variant => $crate::symbolic_enum!(@name $variant $($sym)?)),+ }
            }

            pub fn lookup(key: &str) -> Option<$name> {
                let key = key.trim();
                Self::ALL.iter().copied().find(|v| v.name().eq_ignore_ascii_case(key))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
