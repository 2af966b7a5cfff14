//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, LitInt, LitStr, parse_macro_input};

/// Derive macro implementing `Solver` by dispatching to `PartSolver<N>` impls
///
/// # Attributes
///
/// - `#[aoc_solver(max_parts = N)]`: Required. Parts `1..=N` are dispatched to
///   `<Self as PartSolver<k>>::solve`; every other part returns
///   `SolveError::PartNotImplemented`.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Day1;
///
/// impl PartSolver<1> for Day1 { /* ... */ }
/// impl PartSolver<2> for Day1 { /* ... */ }
/// ```
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc_solver"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AocSolver derive macro requires #[aoc_solver(max_parts = N)] attribute",
            )
        })?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let value: LitInt = meta.value()?.parse()?;
            max_parts = Some(value.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported aoc_solver property"))
        }
    })?;

    let max_parts = max_parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'max_parts' property"))?;
    if max_parts == 0 {
        return Err(syn::Error::new_spanned(attr, "'max_parts' must be at least 1"));
    }

    let arms = (1..=max_parts).map(|part| {
        let part = LitInt::new(&part.to_string(), Span::call_site());
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(::aoc_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    })
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// # Attributes
///
/// - `year`: Required. The Advent of Code year (e.g., 2024)
/// - `day`: Required. The day number (1-25)
/// - `tags`: Optional. Array of string literals for filtering (e.g., ["grid", "dfs"])
///
/// The type must implement `Solver`; otherwise compilation fails with an
/// unsatisfied `Solver` bound pointing at the type.
///
/// # Example
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2024, day = 10, tags = ["grid"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive macro requires #[aoc(...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: LitInt = meta.value()?.parse()?;
            year = Some(value.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let value: LitInt = meta.value()?.parse()?;
            let parsed: u8 = value.base10_parse()?;
            if !(1..=25).contains(&parsed) {
                return Err(syn::Error::new_spanned(value, "day must be in 1..=25"));
            }
            day = Some(parsed);
        } else if meta.path.is_ident("tags") {
            // tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str),
                    other => return Err(syn::Error::new_spanned(other, "tags must be string literals")),
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        } else {
            return Err(meta.error("unsupported aoc property"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'year'"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "missing required 'day'"))?;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
