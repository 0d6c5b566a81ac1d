use proc_macro::TokenStream;
use proc_macro2::{Ident, Literal, Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{LitStr, parse_macro_input};

/// Canonical family names, as accepted by `CurveFamily::from_str`.
const FAMILIES: [&str; 11] = [
    "default",
    "linear",
    "easeIn",
    "easeOut",
    "easeInOut",
    "smooth",
    "spring",
    "snappy",
    "bouncy",
    "interpolatingSpring",
    "interactiveSpring",
];

/// Canonical parameter names, as accepted by `ParamKey::from_str`.
const PARAMS: [&str; 7] = [
    "duration",
    "bounce",
    "extraBounce",
    "stiffness",
    "damping",
    "response",
    "dampingFraction",
];

/// Creates a `CurveSpec` at compile time from a curve descriptor.
///
/// The descriptor is parsed while compiling, and the parameter table is
/// checked with const assertions: every key must be one the family reads
/// and every value must be acceptable for its key. A bad descriptor is a
/// compile error rather than a runtime `Result`.
///
/// # Format
///
/// `name` or `name(key: value, key: value, ...)` where:
/// - `name` is a canonical family name such as `spring` or `easeInOut`
/// - `key` is a canonical parameter name such as `bounce` or `dampingFraction`
/// - `value` is a finite number
///
/// # Examples
///
/// ```ignore
/// use curvelab::curve;
///
/// let ease = curve!("easeOut");
/// let spring = curve!("spring(bounce: 0.3)");
/// let custom = curve!("interpolatingSpring(stiffness: 250, damping: 12.5)");
///
/// // Fails to compile: easeIn does not read bounce
/// // let bad = curve!("easeIn(bounce: 0.3)");
/// ```
#[proc_macro]
pub fn curve(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let descriptor = input.value();

    match parse_descriptor(&descriptor) {
        Ok(parsed) => TokenStream::from(expand(&parsed, input.span())),
        Err(e) => {
            let error_msg = format!("Invalid curve descriptor '{}': {}", descriptor, e);
            TokenStream::from(quote! {
                compile_error!(#error_msg)
            })
        }
    }
}

#[derive(Debug, PartialEq)]
struct Descriptor {
    family: &'static str,
    params: Vec<(&'static str, f64)>,
}

fn lookup(table: &[&'static str], name: &str) -> Option<&'static str> {
    table.iter().copied().find(|candidate| *candidate == name)
}

fn parse_descriptor(s: &str) -> Result<Descriptor, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty string".to_string());
    }

    let (name, body) = match s.find('(') {
        Some(open) => {
            let body = s[open + 1..]
                .strip_suffix(')')
                .ok_or_else(|| "missing closing ')'".to_string())?;
            (s[..open].trim(), body)
        }
        None if s.contains(')') => return Err("unexpected ')'".to_string()),
        None => (s, ""),
    };

    let family = lookup(&FAMILIES, name).ok_or_else(|| format!("unknown curve family '{}'", name))?;
    let mut params: Vec<(&'static str, f64)> = Vec::new();

    for entry in body.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (key, value) = entry
            .split_once(':')
            .ok_or_else(|| format!("expected 'key: value', found '{}'", entry))?;
        let key = key.trim();
        let key = lookup(&PARAMS, key).ok_or_else(|| format!("unknown parameter '{}'", key))?;
        let value = value.trim();
        let value = value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid value '{}' for '{}'", value, key))?;
        if params.iter().any(|(existing, _)| *existing == key) {
            return Err(format!("parameter '{}' given more than once", key));
        }
        params.push((key, value));
    }

    Ok(Descriptor { family, params })
}

/// `easeInOut` -> `EaseInOut`
fn variant(name: &str, span: Span) -> Ident {
    let mut chars = name.chars();
    let camel = match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    Ident::new(&camel, span)
}

fn value_tokens(value: f64) -> TokenStream2 {
    let literal = Literal::f64_suffixed(value.abs());
    if value.is_sign_negative() {
        quote! { -#literal }
    } else {
        quote! { #literal }
    }
}

fn expand(descriptor: &Descriptor, span: Span) -> TokenStream2 {
    let family_name = descriptor.family;
    let family = variant(family_name, span);

    let checks = descriptor.params.iter().map(|(key_name, value)| {
        let key = variant(key_name, span);
        let value = value_tokens(*value);
        let unread = format!("{} does not read '{}'", family_name, key_name);
        let rejected = format!("value out of range for '{}'", key_name);
        quote! {
            assert!(
                ::curvelab::CurveFamily::#family.reads(::curvelab::ParamKey::#key),
                #unread
            );
            assert!(::curvelab::ParamKey::#key.accepts(#value), #rejected);
        }
    });

    let pairs = descriptor.params.iter().map(|(key_name, value)| {
        let key = variant(key_name, span);
        let value = value_tokens(*value);
        quote! { (::curvelab::ParamKey::#key, #value) }
    });

    let params = if descriptor.params.is_empty() {
        quote! { ::curvelab::ParameterSet::new() }
    } else {
        quote! { ::curvelab::ParameterSet::from([#(#pairs),*]) }
    };

    quote! {
        {
            const _: () = {
                #(#checks)*
            };
            ::curvelab::CurveSpec::from_checked(::curvelab::CurveFamily::#family, #params)
        }
    }
}
