//! Conversions into `KString` for attribute values and text, so that
//! builders can take `&str`, `String`, numbers etc. alike.

use std::borrow::Cow;

use kstring::KString;

// `From` can't be used since KString already has its own set of
// `From` impls that we can't extend with the numeric ones.
pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

// No way to have a separate impl for &'static str, hence no
// KString::from_static here.
impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&&str> for KString {
    fn myfrom(s: &&str) -> Self {
        KString::from_ref(*s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}

impl<'t> MyFrom<Cow<'t, str>> for KString {
    fn myfrom(s: Cow<'t, str>) -> Self {
        match s {
            Cow::Borrowed(s) => KString::from_ref(s),
            Cow::Owned(s) => KString::from_string(s),
        }
    }
}

impl MyFrom<char> for KString {
    fn myfrom(c: char) -> Self {
        KString::from_string(c.to_string())
    }
}

impl MyFrom<bool> for KString {
    fn myfrom(b: bool) -> Self {
        KString::from_static(if b { "true" } else { "false" })
    }
}

macro_rules! myfrom_integer {
    { $($t:ty)* } => {
        $(
            impl MyFrom<$t> for KString {
                fn myfrom(val: $t) -> Self {
                    KString::from_string(val.to_string())
                }
            }
        )*
    }
}

myfrom_integer! { u8 u16 u32 u64 usize i8 i16 i32 i64 isize }


#[cfg(test)]
mod tests {
    use super::*;

    fn ks<T>(v: T) -> KString
    where KString: MyFrom<T>
    {
        KString::myfrom(v)
    }

    #[test]
    fn t_myfrom() {
        assert_eq!(ks("a").as_str(), "a");
        assert_eq!(ks(String::from("b")).as_str(), "b");
        assert_eq!(ks(&String::from("c")).as_str(), "c");
        assert_eq!(ks(Cow::Borrowed("d")).as_str(), "d");
        assert_eq!(ks(42usize).as_str(), "42");
        assert_eq!(ks(-7i64).as_str(), "-7");
        assert_eq!(ks(true).as_str(), "true");
        assert_eq!(ks('x').as_str(), "x");
    }
}
