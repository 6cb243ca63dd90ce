//! Expansion of `#[derive(ErrorKind)]`.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Data,
    DeriveInput,
    Expr,
    Fields,
    Ident,
    MetaNameValue,
    Result,
    Token,
};

/// The tags given to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorTags {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorTags {
    /// Reads the tags of the first `error` attribute in the list. A type without one gets a
    /// report with no message, labels or help.
    fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut tags = Self::default();
        let Some(attr) = attrs.iter().find(|attr| attr.path().is_ident("error")) else {
            return Ok(tags);
        };

        let pairs = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
        for pair in pairs {
            let slot = if pair.path.is_ident("message") {
                &mut tags.message
            } else if pair.path.is_ident("labels") {
                &mut tags.labels
            } else if pair.path.is_ident("help") {
                &mut tags.help
            } else {
                return Err(syn::Error::new_spanned(&pair.path, "unknown tag, expected one of `message`, `labels`, `help`"));
            };

            if slot.replace(pair.value).is_some() {
                return Err(syn::Error::new_spanned(&pair.path, "tag given more than once"));
            }
        }

        Ok(tags)
    }
}

/// A struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub tags: ErrorTags,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let DeriveInput { attrs, ident, data, .. } = input.parse()?;
        let Data::Struct(data) = data else {
            return Err(syn::Error::new_spanned(ident, "`ErrorKind` can only be derived for structs"));
        };

        Ok(Self {
            tags: ErrorTags::from_attrs(&attrs)?,
            name: ident,
            fields: data.fields,
        })
    }
}

impl ErrorKindTarget {
    /// Brings the named fields of `self` into scope, so that tag expressions can refer to them.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote! { let #name { #(#names),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! { name.span() =>
                compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }

    /// Generates the full `impl ErrorKind` block.
    pub fn expand(&self) -> TokenStream2 {
        let name = &self.name;
        let bindings = self.bind_fields();
        let message = self.tags.message.iter();
        let help = self.tags.help.iter();
        let labels = match &self.tags.labels {
            Some(labels) => quote! { #labels },
            None => quote! { std::iter::empty::<String>() },
        };

        quote! {
            impl ErrorKind for #name {
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                    #[allow(unused_variables)]
                    #bindings

                    let offset = spans.first().map_or(0, |span| span.start);
                    let mut report = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset);
                    #( report = report.with_message(#message); )*

                    // labels beyond the number of spans are dropped, and vice versa
                    for (text, span) in #labels.into_iter().zip(spans) {
                        let text = text.to_string();
                        let label = ariadne::Label::new((src_id, span.clone()))
                            .with_color(dice_error::EXPR);
                        report = report.with_label(if text.is_empty() {
                            label
                        } else {
                            label.with_message(text)
                        });
                    }

                    #( report.set_help(#help); )*
                    report.finish()
                }
            }
        }
    }
}
