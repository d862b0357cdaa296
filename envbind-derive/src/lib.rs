//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `Bindable` derive macro
///
/// Generates the static field table and field accessors `envbind::Binder`
/// walks, and makes the struct usable as a nested field of other bindable
/// structs.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[tag(env = "segment")]`: Explicit key segment under the tag name `env`
/// - `#[tag(env = "a", other = "b")]`: Several tag names on one field
/// - `#[bind(skip)]`: Leave the field alone; its type needs no `Field` impl
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Bindable, attributes(tag, bind))]
pub fn derive_bindable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    // Struct name
    let struct_name = &input.ident;

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unnamed(fields) => {
                return Err(syn::Error::new_spanned(
                    fields,
                    "Bindable only supports structs with named fields",
                ));
            }
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Bindable only supports structs with named fields",
                ));
            }
        },
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "Bindable only supports structs",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Bindable only supports structs",
            ));
        }
    };

    let parsed = fields
        .iter()
        .map(|field| FieldAttrs::from_field(field).map(|attrs| (field, attrs)))
        .collect::<syn::Result<Vec<_>>>()?;

    // Generic structs need every bound field type to be a field themselves
    let mut generics = input.generics.clone();
    if !generics.params.is_empty() {
        let where_clause = generics.make_where_clause();
        for (field, _) in parsed.iter().filter(|(_, attrs)| !attrs.skip) {
            let ty = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#ty: ::envbind::Field));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut descriptors = Vec::with_capacity(parsed.len());
    let mut accessors = Vec::with_capacity(parsed.len());

    for (index, (field, attrs)) in parsed.iter().enumerate() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_type = &field.ty;
        let field_name = field_ident.unraw().to_string();
        let tags = attrs.tags.iter().map(|(name, segment)| quote!((#name, #segment)));

        // Skipped fields are never touched, whatever their type
        let (kind, slot) = if attrs.skip {
            (
                quote!(::envbind::FieldKind::Unsupported),
                quote!(::envbind::Slot::Unsupported),
            )
        } else {
            (
                quote!(<#field_type as ::envbind::Field>::KIND),
                quote!(::envbind::Field::slot(&mut self.#field_ident)),
            )
        };

        descriptors.push(quote! {
            ::envbind::FieldDescriptor::new(#field_name, &[#(#tags),*], #kind)
        });

        accessors.push(quote! {
            #index => ::core::option::Option::Some(#slot)
        });
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envbind::FieldTable for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::envbind::FieldDescriptor] = &[#(#descriptors),*];
        }

        #[automatically_derived]
        impl #impl_generics ::envbind::Bindable for #struct_name #ty_generics #where_clause {
            fn descriptors(&self) -> &'static [::envbind::FieldDescriptor] {
                <Self as ::envbind::FieldTable>::FIELDS
            }

            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<::envbind::Slot<'_>> {
                match index {
                    #(#accessors,)*
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl #impl_generics ::envbind::Field for #struct_name #ty_generics #where_clause {
            const KIND: ::envbind::FieldKind = ::envbind::FieldKind::Struct;

            fn slot(&mut self) -> ::envbind::Slot<'_> {
                ::envbind::Slot::Struct(self)
            }
        }
    })
}
