#![warn(clippy::pedantic)]

use ariadne::{
    Config,
    Label,
    Report,
    ReportKind,
    Source,
};
use chumsky::{
    error::{
        Simple,
        SimpleReason,
    },
    primitive::end,
    Parser,
};
use proc_macro::TokenStream;
use proc_macro2::{
    Literal,
    Span,
    TokenStream as TokenStream2,
};
use quote::{
    ToTokens,
    TokenStreamExt as _,
};
use syn::{
    parenthesized,
    parse::{
        Parse,
        ParseStream,
        Result as ParseResult,
    },
    parse_macro_input,
    Ident,
    LitStr,
    Token,
    Visibility,
};

macro_rules! unsuffixed_primitive {
    ($type:ident: $primitive:ident => $method:ident) => {
        struct $type($primitive);

        impl ToTokens for $type {
            fn to_tokens(&self, tokens: &mut TokenStream2) {
                tokens.append(Literal::$method(self.0))
            }
        }

        impl From<$primitive> for $type {
            fn from(value: $primitive) -> Self {
                Self(value)
            }
        }
    };
}

unsuffixed_primitive!(UnsuffixedUsize: usize => usize_unsuffixed);

enum Method {
    Seq,
}

impl TryFrom<Ident> for Method {
    type Error = syn::Error;

    fn try_from(value: Ident) -> Result<Self, Self::Error> {
        match value.to_string().as_str() {
            "seq" => Ok(Self::Seq),
            _ => Err(syn::Error::new(value.span(), "expected one of: `seq`")),
        }
    }
}

struct Dna {
    visibility: Visibility,
    name: Ident,
    method: Method,
    sequence: String,
}

impl Dna {
    #[must_use]
    fn into_tokens(self) -> TokenStream2 {
        let parse_result = match self.method {
            Method::Seq => dnamatch_common::dna_sequence()
                .then_ignore(end())
                .parse(self.sequence.as_str()),
        };

        match parse_result {
            Ok(bases) => self.tokenize_sequence(&bases),
            Err(errors) => self.tokenize_errors(&errors),
        }
    }

    #[must_use]
    fn tokenize_sequence(&self, bases: &[u8]) -> TokenStream2 {
        let len: UnsuffixedUsize = bases.len().into();
        let bases = Literal::byte_string(bases);
        let Self {
            visibility, name, ..
        } = self;
        quote::quote! {
            #visibility const #name: ::dnamatch_common::StaticSequence<#len> = ::dnamatch_common::StaticSequence::new(*#bases);
        }
    }

    #[must_use]
    fn tokenize_errors(&self, errors: &[Simple<char>]) -> TokenStream2 {
        let Some(error) = errors.first() else {
            return quote::quote_spanned!(Span::call_site() => compile_error!("invalid sequence"));
        };
        let mut buffer = Vec::new();
        let written = Report::build(ReportKind::Error, (), error.span().start)
            .with_config(Config::default().with_color(false))
            .with_message(error.to_string())
            .with_label(Label::new(error.span()).with_message(match error.reason() {
                SimpleReason::Unexpected => "unexpected input",
                SimpleReason::Unclosed {
                    span: _,
                    delimiter: _,
                } => "unclosed delimiter",
                SimpleReason::Custom(custom) => custom.as_str(),
            }))
            .finish()
            .write(Source::from(&self.sequence), &mut buffer);
        let error_message = match written {
            Ok(()) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(_) => error.to_string(),
        };
        quote::quote_spanned!(Span::call_site() => compile_error!(#error_message))
    }
}

impl Parse for Dna {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let visibility = input.parse()?;
        input.parse::<Token![const]>()?;
        let name = input.parse()?;
        input.parse::<Token![=]>()?;
        let method = input.parse::<Ident>()?.try_into()?;
        let sequence = {
            let content;
            parenthesized!(content in input);
            content.parse::<LitStr>()?.value()
        };
        input.parse::<Token![;]>()?;
        Ok(Self {
            visibility,
            name,
            method,
            sequence,
        })
    }
}

struct DnaList(Vec<Dna>);

impl Parse for DnaList {
    fn parse(input: ParseStream) -> ParseResult<Self> {
        let mut list = Vec::new();
        while !input.is_empty() {
            list.push(input.parse()?);
        }
        Ok(Self(list))
    }
}

/// Validates and constructs nucleotide sequences at compile-time.
///
/// ## Syntax
/// Expects one or more items of the form: `$VISIBILITY? const $IDENTIFIER = $METHOD("$SEQUENCE");`
///
/// With the following rules:
/// * `$VISIBILITY` is a valid [Visibility](<https://doc.rust-lang.org/reference/visibility-and-privacy.html>) token, or nothing.
/// * `$IDENTIFIER` is a valid [Identifier](<https://doc.rust-lang.org/reference/identifiers.html>) token.
/// * `$METHOD` is one of:
///   * `seq`, for one or more of `A`, `T`, `G`, `C` in any case.
/// * `$SEQUENCE` is a valid sequence whose syntax depends on the chosen `$METHOD`.
///
/// Bases are normalized to uppercase.
///
/// ## Example
/// ```
/// # use dnamatch_macros::dna;
/// dna! {
///     const SEQUENCE = seq("GATTACA");
///     const PATTERN = seq("tac");
/// }
/// assert_eq!(SEQUENCE.len(), 7);
/// assert_eq!(PATTERN.as_bytes(), b"TAC");
/// ```
#[proc_macro]
pub fn dna(input: TokenStream) -> TokenStream {
    let DnaList(list) = parse_macro_input!(input as DnaList);
    list.into_iter()
        .map(Dna::into_tokens)
        .collect::<TokenStream2>()
        .into()
}
