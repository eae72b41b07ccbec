//! ChoiceEnum derive macro implementation
//!
//! Every unit variant of the input enum is a declared constant. For each one,
//! in declaration order, the derive resolves a declared name, a human-readable
//! description and a generated value. The finished tables are emitted as
//! `match` arms so that lookups in both directions are fixed at compile time.

use std::collections::hash_map::Entry;
use std::fmt;

use darling::{ast, error::Accumulator, FromDeriveInput, FromMeta, FromVariant};
use proc_macro::TokenStream;
use quote::quote;
use rustc_hash::FxHashMap;
use syn::{parse_macro_input, DeriveInput, Expr};

use crate::utils::{self, RenameRule, ValueOverride};

/// How values are generated for constants without an override
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromMeta)]
pub enum ValuePolicy {
    /// The declared name is the value
    #[default]
    #[darling(rename = "name")]
    Name,
    /// The 1-based declaration position is the value
    #[darling(rename = "ordinal")]
    Ordinal,
}

/// What the derived serde impls carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromMeta)]
pub enum SerdeRepr {
    /// The declared name goes on the wire
    #[default]
    #[darling(rename = "name")]
    Name,
    /// The generated value goes on the wire
    #[darling(rename = "value")]
    Value,
    /// No serde impls are emitted
    #[darling(rename = "none")]
    Skip,
}

/// Receiver for the enum that derives `ChoiceEnum`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(choice), supports(enum_unit))]
struct ChoiceEnumReceiver {
    /// The enum identifier
    ident: syn::Ident,
    generics: syn::Generics,
    /// The enum variants
    data: ast::Data<ChoiceVariantReceiver, ()>,
    #[darling(default)]
    values: ValuePolicy,
    /// First ordinal, only meaningful with `values = "ordinal"`
    #[darling(default)]
    start: Option<i64>,
    #[darling(default)]
    rename_all: Option<RenameRule>,
    #[darling(default)]
    serde: SerdeRepr,
}

/// Receiver for a single declared constant
#[derive(Debug, FromVariant)]
#[darling(attributes(choice), forward_attrs(doc))]
struct ChoiceVariantReceiver {
    ident: syn::Ident,
    /// Doc comments, used as the description fallback
    attrs: Vec<syn::Attribute>,
    #[darling(default)]
    name: Option<String>,
    #[darling(default)]
    description: Option<String>,
    #[darling(default)]
    value: Option<ValueOverride>,
}

/// The value a constant holds after processing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeneratedValue {
    Text(String),
    Integer(i64),
}

impl GeneratedValue {
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Self::Text(text) => quote!(#text),
            Self::Integer(value) if *value < 0 => {
                let magnitude = proc_macro2::Literal::u64_unsuffixed(value.unsigned_abs());
                quote!(-#magnitude)
            }
            Self::Integer(value) => {
                let literal = proc_macro2::Literal::i64_unsuffixed(*value);
                quote!(#literal)
            }
        }
    }
}

impl fmt::Display for GeneratedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// A fully resolved constant
#[derive(Debug, Clone)]
pub struct Constant {
    pub ident: syn::Ident,
    pub name: String,
    pub description: String,
    /// 1-based declaration position
    pub position: usize,
    pub value: GeneratedValue,
}

/// Everything the code generator needs for one enum
#[derive(Debug)]
pub struct ChoiceEnumDef {
    pub ident: syn::Ident,
    pub policy: ValuePolicy,
    pub serde: SerdeRepr,
    pub constants: Vec<Constant>,
}

/// Process the ChoiceEnum derive macro
pub fn process_derive_choice_enum(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    match expand_choice_enum(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Expand a derive input into the generated impls
pub fn expand_choice_enum(input: &DeriveInput) -> darling::Result<proc_macro2::TokenStream> {
    let def = parse_choice_enum(input)?;
    Ok(generate_choice_enum_impl(&def))
}

/// Resolve names, descriptions and values for every declared constant
pub fn parse_choice_enum(input: &DeriveInput) -> darling::Result<ChoiceEnumDef> {
    let receiver = ChoiceEnumReceiver::from_derive_input(input)?;

    let ast::Data::Enum(variants) = &receiver.data else {
        unreachable!("Darling ensures this is an enum")
    };

    let mut errors = darling::Error::accumulator();

    if !receiver.generics.params.is_empty() {
        errors.push(
            darling::Error::custom("ChoiceEnum cannot be derived for generic enums")
                .with_span(&receiver.generics),
        );
    }

    if receiver.start.is_some() && receiver.values != ValuePolicy::Ordinal {
        errors.push(
            darling::Error::custom("`start` requires `values = \"ordinal\"`")
                .with_span(&receiver.ident),
        );
    }

    let discriminants = declared_discriminants(input);
    let start = receiver.start.unwrap_or(1);

    let mut constants = Vec::with_capacity(variants.len());
    for (index, variant) in variants.iter().enumerate() {
        let discriminant = discriminants.get(index).and_then(Option::as_ref);
        let resolved = resolve_constant(&receiver, variant, discriminant, start, index + 1);
        if let Some(constant) = errors.handle(resolved) {
            constants.push(constant);
        }
    }

    check_unique(&constants, &mut errors);

    errors.finish_with(ChoiceEnumDef {
        ident: receiver.ident.clone(),
        policy: receiver.values,
        serde: receiver.serde,
        constants,
    })
}

/// Discriminant expressions in declaration order, `None` where absent
fn declared_discriminants(input: &DeriveInput) -> Vec<Option<Expr>> {
    match &input.data {
        syn::Data::Enum(data) => data
            .variants
            .iter()
            .map(|variant| variant.discriminant.as_ref().map(|(_, expr)| expr.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

fn resolve_constant(
    receiver: &ChoiceEnumReceiver,
    variant: &ChoiceVariantReceiver,
    discriminant: Option<&Expr>,
    start: i64,
    position: usize,
) -> darling::Result<Constant> {
    let name = match (&variant.name, receiver.rename_all) {
        (Some(name), _) => name.clone(),
        (None, Some(rule)) => rule.apply(&variant.ident.to_string()),
        (None, None) => variant.ident.to_string(),
    };

    if name.is_empty() {
        return Err(darling::Error::custom("declared name cannot be empty").with_span(&variant.ident));
    }

    let description = variant
        .description
        .clone()
        .or_else(|| utils::doc_description(&variant.attrs))
        .unwrap_or_else(|| name.clone());

    let value = resolve_value(receiver.values, variant, discriminant, &name, start, position)?;

    Ok(Constant {
        ident: variant.ident.clone(),
        name,
        description,
        position,
        value,
    })
}

/// Variant override first, then the enum's policy
fn resolve_value(
    policy: ValuePolicy,
    variant: &ChoiceVariantReceiver,
    discriminant: Option<&Expr>,
    name: &str,
    start: i64,
    position: usize,
) -> darling::Result<GeneratedValue> {
    match policy {
        ValuePolicy::Name => match &variant.value {
            Some(ValueOverride::Text(text)) => Ok(GeneratedValue::Text(text.value())),
            Some(ValueOverride::Integer(expr)) => Err(darling::Error::custom(
                "expected a string value for `values = \"name\"`",
            )
            .with_span(expr)),
            None => Ok(GeneratedValue::Text(name.to_owned())),
        },
        ValuePolicy::Ordinal => {
            let explicit = match &variant.value {
                Some(ValueOverride::Integer(expr)) => Some(expr),
                Some(ValueOverride::Text(text)) => {
                    return Err(darling::Error::custom(
                        "expected an integer value for `values = \"ordinal\"`",
                    )
                    .with_span(text));
                }
                None => discriminant,
            };

            match explicit {
                Some(expr) => utils::int_from_expr(expr).map(GeneratedValue::Integer),
                None => ordinal(start, position)
                    .map(GeneratedValue::Integer)
                    .ok_or_else(|| {
                        darling::Error::custom("ordinal does not fit in i64").with_span(&variant.ident)
                    }),
            }
        }
    }
}

fn ordinal(start: i64, position: usize) -> Option<i64> {
    let offset = i64::try_from(position - 1).ok()?;
    start.checked_add(offset)
}

/// Declared names and generated values must both be unique
fn check_unique(constants: &[Constant], errors: &mut Accumulator) {
    let mut names: FxHashMap<&str, &syn::Ident> = FxHashMap::default();
    let mut values: FxHashMap<&GeneratedValue, &syn::Ident> = FxHashMap::default();

    for constant in constants {
        match names.entry(constant.name.as_str()) {
            Entry::Occupied(first) => errors.push(
                darling::Error::custom(format!(
                    "duplicate declared name `{}`, already used by `{}`",
                    constant.name,
                    first.get()
                ))
                .with_span(&constant.ident),
            ),
            Entry::Vacant(slot) => {
                slot.insert(&constant.ident);
            }
        }

        match values.entry(&constant.value) {
            Entry::Occupied(first) => errors.push(
                darling::Error::custom(format!(
                    "duplicate generated value {}, already used by `{}`",
                    constant.value,
                    first.get()
                ))
                .with_span(&constant.ident),
            ),
            Entry::Vacant(slot) => {
                slot.insert(&constant.ident);
            }
        }
    }
}

/// Generate the trait implementation and the primitive-facing impls
fn generate_choice_enum_impl(def: &ChoiceEnumDef) -> proc_macro2::TokenStream {
    let enum_name = &def.ident;
    let type_name = enum_name.to_string();

    let idents: Vec<_> = def.constants.iter().map(|c| &c.ident).collect();
    let names: Vec<_> = def.constants.iter().map(|c| c.name.as_str()).collect();
    let descriptions: Vec<_> = def.constants.iter().map(|c| c.description.as_str()).collect();
    let positions: Vec<_> = def.constants.iter().map(|c| c.position).collect();
    let values: Vec<_> = def.constants.iter().map(|c| c.value.to_tokens()).collect();

    let (value_type, lookup_body) = match def.policy {
        ValuePolicy::Name => (
            quote!(&'static str),
            quote! {
                match value {
                    #(#values => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            },
        ),
        ValuePolicy::Ordinal => (
            quote!(i64),
            quote! {
                match *value {
                    #(#values => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            },
        ),
    };

    let primitive_impls = match def.policy {
        ValuePolicy::Name => generate_text_impls(enum_name),
        ValuePolicy::Ordinal => generate_integer_impls(enum_name, &idents, &values),
    };

    let serde_impls = generate_serde_impls(enum_name, def.serde);

    quote! {
        impl ::choice_enum::ChoiceEnum for #enum_name {
            type Value = #value_type;

            const TYPE_NAME: &'static str = #type_name;
            const MEMBERS: &'static [Self] = &[#(Self::#idents),*];

            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            fn description(self) -> &'static str {
                match self {
                    #(Self::#idents => #descriptions,)*
                }
            }

            fn value(self) -> Self::Value {
                match self {
                    #(Self::#idents => #values,)*
                }
            }

            fn position(self) -> usize {
                match self {
                    #(Self::#idents => #positions,)*
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(Self::#idents),)*
                    _ => ::core::option::Option::None,
                }
            }

            fn from_value(
                value: &<Self::Value as ::choice_enum::ChoiceValue>::Lookup,
            ) -> ::core::option::Option<Self> {
                #lookup_body
            }
        }

        impl ::core::fmt::Debug for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{}.{}", #type_name, ::choice_enum::ChoiceEnum::name(*self))
            }
        }

        impl ::core::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad(::choice_enum::ChoiceEnum::name(*self))
            }
        }

        impl ::core::hash::Hash for #enum_name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&::choice_enum::ChoiceEnum::value(*self), state);
            }
        }

        impl ::core::str::FromStr for #enum_name {
            type Err = ::choice_enum::ChoiceError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::choice_enum::ChoiceEnum>::parse_name(s)
            }
        }

        #primitive_impls
        #serde_impls
    }
}

/// Impls that let a name-valued constant stand in for a plain string
fn generate_text_impls(enum_name: &syn::Ident) -> proc_macro2::TokenStream {
    quote! {
        impl ::core::borrow::Borrow<str> for #enum_name {
            fn borrow(&self) -> &str {
                ::choice_enum::ChoiceEnum::value(*self)
            }
        }

        impl ::core::convert::AsRef<str> for #enum_name {
            fn as_ref(&self) -> &str {
                ::choice_enum::ChoiceEnum::value(*self)
            }
        }

        impl ::core::cmp::PartialEq<str> for #enum_name {
            fn eq(&self, other: &str) -> bool {
                ::choice_enum::ChoiceEnum::value(*self) == other
            }
        }

        impl<'a> ::core::cmp::PartialEq<&'a str> for #enum_name {
            fn eq(&self, other: &&'a str) -> bool {
                ::choice_enum::ChoiceEnum::value(*self) == *other
            }
        }

        impl ::core::cmp::PartialEq<::std::string::String> for #enum_name {
            fn eq(&self, other: &::std::string::String) -> bool {
                ::choice_enum::ChoiceEnum::value(*self) == other.as_str()
            }
        }

        impl ::core::cmp::PartialEq<#enum_name> for str {
            fn eq(&self, other: &#enum_name) -> bool {
                self == ::choice_enum::ChoiceEnum::value(*other)
            }
        }

        impl<'a> ::core::cmp::PartialEq<#enum_name> for &'a str {
            fn eq(&self, other: &#enum_name) -> bool {
                *self == ::choice_enum::ChoiceEnum::value(*other)
            }
        }

        impl ::core::cmp::PartialEq<#enum_name> for ::std::string::String {
            fn eq(&self, other: &#enum_name) -> bool {
                self.as_str() == ::choice_enum::ChoiceEnum::value(*other)
            }
        }

        impl ::core::convert::From<#enum_name> for &'static str {
            fn from(member: #enum_name) -> Self {
                ::choice_enum::ChoiceEnum::value(member)
            }
        }
    }
}

/// Impls that let an ordinal-valued constant stand in for a plain integer
fn generate_integer_impls(
    enum_name: &syn::Ident,
    idents: &[&syn::Ident],
    values: &[proc_macro2::TokenStream],
) -> proc_macro2::TokenStream {
    quote! {
        impl ::core::borrow::Borrow<i64> for #enum_name {
            fn borrow(&self) -> &i64 {
                match *self {
                    #(Self::#idents => &#values,)*
                }
            }
        }

        impl ::core::cmp::PartialEq<i64> for #enum_name {
            fn eq(&self, other: &i64) -> bool {
                ::choice_enum::ChoiceEnum::value(*self) == *other
            }
        }

        impl ::core::cmp::PartialEq<#enum_name> for i64 {
            fn eq(&self, other: &#enum_name) -> bool {
                *self == ::choice_enum::ChoiceEnum::value(*other)
            }
        }

        impl ::core::convert::From<#enum_name> for i64 {
            fn from(member: #enum_name) -> Self {
                ::choice_enum::ChoiceEnum::value(member)
            }
        }

        impl ::core::convert::TryFrom<i64> for #enum_name {
            type Error = ::choice_enum::ChoiceError;

            fn try_from(value: i64) -> ::core::result::Result<Self, Self::Error> {
                <Self as ::choice_enum::ChoiceEnum>::parse_value(&value)
            }
        }
    }
}

fn generate_serde_impls(enum_name: &syn::Ident, repr: SerdeRepr) -> proc_macro2::TokenStream {
    let helper = match repr {
        SerdeRepr::Name => quote!(by_name),
        SerdeRepr::Value => quote!(by_value),
        SerdeRepr::Skip => return proc_macro2::TokenStream::new(),
    };

    quote! {
        impl ::choice_enum::__private::serde::Serialize for #enum_name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::choice_enum::__private::serde::Serializer,
            {
                ::choice_enum::field::#helper::serialize(self, serializer)
            }
        }

        impl<'de> ::choice_enum::__private::serde::Deserialize<'de> for #enum_name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::choice_enum::__private::serde::Deserializer<'de>,
            {
                ::choice_enum::field::#helper::deserialize(deserializer)
            }
        }
    }
}
