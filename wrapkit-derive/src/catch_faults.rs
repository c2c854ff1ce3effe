//! Implementation of the `#[catch_faults]` attribute.
//!
//! The annotated function is split in two: its original signature and body
//! become a private inner `__wrapkit_target`, and the outer function, with the
//! same name and parameters, forwards its arguments as one tuple to a
//! `static` `FaultLogging` wrapper holding that target.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::spanned::Spanned;
use syn::{
    FnArg, GenericArgument, GenericParam, Ident, ItemFn, Pat, PathArguments, ReturnType,
    Signature, Type, parse_macro_input,
};

pub fn catch_faults_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let attribute: TokenStream2 = attribute.into();
    if !attribute.is_empty() {
        return syn::Error::new(attribute.span(), "#[catch_faults] takes no arguments")
            .to_compile_error()
            .into();
    }

    let function = parse_macro_input!(item as ItemFn);

    match expand(&function) {
        Ok(expanded) => expanded.into(),
        Err(error) => error.to_compile_error().into(),
    }
}

/// How the target's return type maps onto the wrapper's `Ok` type.
enum Shape {
    /// The target already returns a `Result`; `Ok` carries this type.
    Fallible(Type),
    /// The target returns this type directly and is adapted with `Total`.
    Infallible(Type),
}

fn expand(function: &ItemFn) -> syn::Result<TokenStream2> {
    let signature = &function.sig;
    reject_unsupported(signature)?;

    let attributes = &function.attrs;
    let visibility = &function.vis;
    let name = &signature.ident;
    let generics = &signature.generics;
    let inputs = &signature.inputs;
    let output = &signature.output;
    let block = &function.block;

    let mut parameter_types = Vec::with_capacity(inputs.len());
    let mut forwarded = Vec::with_capacity(inputs.len());
    let mut outer_parameters = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.iter().enumerate() {
        let FnArg::Typed(typed) = input else {
            return Err(syn::Error::new(
                input.span(),
                "#[catch_faults] cannot wrap methods; wrap a free function instead",
            ));
        };
        if let Type::ImplTrait(impl_trait) = typed.ty.as_ref() {
            return Err(syn::Error::new(
                impl_trait.span(),
                "#[catch_faults] does not support `impl Trait` parameters",
            ));
        }

        let identifier = parameter_identifier(&typed.pat, index);
        let parameter_type = &typed.ty;
        outer_parameters.push(quote! { #identifier: #parameter_type });
        forwarded.push(identifier);
        parameter_types.push(parameter_type.as_ref().clone());
    }

    let return_type: Type = match output {
        ReturnType::Default => syn::parse_quote! { () },
        ReturnType::Type(_, return_type) => return_type.as_ref().clone(),
    };

    // Lifetime parameters stay late-bound, so the pointer is higher-ranked
    // over them and the `static` needs no outer generics.
    let lifetimes: Vec<_> = generics.lifetimes().map(|parameter| &parameter.lifetime).collect();
    let binder = if lifetimes.is_empty() {
        quote! {}
    } else {
        quote! { for<#(#lifetimes),*> }
    };
    let pointer_type = quote! { #binder fn(#(#parameter_types),*) -> #return_type };
    let target_cast = quote! { __wrapkit_target as #pointer_type };

    let (ok_type, wrapped_type, wrapped_target) = match classify(&return_type) {
        Shape::Fallible(ok_type) => (ok_type, pointer_type, target_cast),
        Shape::Infallible(ok_type) => (
            ok_type,
            quote! { ::wrapkit::fault::Total<#pointer_type> },
            quote! { ::wrapkit::fault::Total::new(#target_cast) },
        ),
    };

    Ok(quote! {
        #(#attributes)*
        #visibility fn #name #generics(#(#outer_parameters),*)
            -> ::core::result::Result<#ok_type, ::wrapkit::fault::Fault>
        {
            fn __wrapkit_target #generics(#inputs) #output #block

            static __WRAPKIT_WRAPPED: ::wrapkit::fault::FaultLogging<
                #wrapped_type,
                ::wrapkit::sink::Console,
            > = ::wrapkit::fault::FaultLogging::new(#wrapped_target, ::wrapkit::sink::Console);

            ::wrapkit::Invoke::invoke(&__WRAPKIT_WRAPPED, (#(#forwarded,)*))
        }
    })
}

fn reject_unsupported(signature: &Signature) -> syn::Result<()> {
    let unsupported = if signature.asyncness.is_some() {
        Some("async functions")
    } else if signature.constness.is_some() {
        Some("const functions")
    } else if signature.unsafety.is_some() {
        Some("unsafe functions")
    } else if signature.abi.is_some() {
        Some("extern functions")
    } else if signature.variadic.is_some() {
        Some("variadic functions")
    } else if signature.generics.where_clause.is_some()
        || signature.generics.params.iter().any(|parameter| {
            matches!(parameter, GenericParam::Type(_) | GenericParam::Const(_))
        })
    {
        Some("generic functions")
    } else if signature
        .generics
        .lifetimes()
        .any(|parameter| !parameter.bounds.is_empty())
    {
        Some("bounded lifetime parameters")
    } else {
        None
    };

    match unsupported {
        Some(what) => Err(syn::Error::new(
            signature.span(),
            format!("#[catch_faults] does not support {what}"),
        )),
        None => Ok(()),
    }
}

/// Uses the parameter's own name when it is a plain binding, otherwise a
/// positional placeholder.
fn parameter_identifier(pattern: &Pat, index: usize) -> Ident {
    match pattern {
        Pat::Ident(binding) if binding.subpat.is_none() && binding.by_ref.is_none() => {
            binding.ident.clone()
        }
        _ => format_ident!("__wrapkit_argument_{}", index),
    }
}

fn classify(return_type: &Type) -> Shape {
    if let Type::Path(type_path) = return_type
        && type_path.qself.is_none()
        && let Some(last) = type_path.path.segments.last()
        && last.ident == "Result"
        && let PathArguments::AngleBracketed(arguments) = &last.arguments
        && let Some(GenericArgument::Type(ok_type)) = arguments.args.first()
    {
        return Shape::Fallible(ok_type.clone());
    }
    Shape::Infallible(return_type.clone())
}
