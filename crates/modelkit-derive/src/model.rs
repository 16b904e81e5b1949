use crate::{
    args::Flags,
    node::{ModelDef, Source},
    util::with_attribute_bounds,
};
use proc_macro2::TokenStream;
use quote::quote;
use syn::DeriveInput;

// derive_model
pub fn derive_model(input: TokenStream) -> TokenStream {
    let input: DeriveInput = match syn::parse2(input) {
        Ok(input) => input,
        Err(err) => return err.to_compile_error(),
    };

    match ModelDef::from_input(&input) {
        Ok(def) => def.expand(),
        Err(err) => err.write_errors(),
    }
}

impl ModelDef {
    fn expand(&self) -> TokenStream {
        let model_impl = self.model_impl();
        let node_impl = self.node_impl();
        let attribute_impl = self.attribute_impl();
        let std_impls = self.std_impls();

        quote! {
            #model_impl
            #node_impl
            #attribute_impl
            #std_impls
        }
    }

    // Model::DECLARATION
    fn model_impl(&self) -> TokenStream {
        let Self {
            ident, name, krate, ..
        } = self;
        let generics = with_attribute_bounds(&self.generics, krate);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
        let type_name = ident.to_string();

        let attributes = self.attributes.iter().map(|attr| {
            let name = &attr.name;
            let Flags { walk, eq, repr } = attr.flags;

            quote! {
                #krate::schema::AttributeDecl::new(
                    #name,
                    #krate::schema::NodeFlags::new(#walk, #eq, #repr),
                )
            }
        });

        let bases = self.bases.iter().map(|base| {
            let ty = &base.ty;

            quote!(<#ty as #krate::traits::Model>::schema)
        });

        quote! {
            impl #impl_generics #krate::traits::Model for #ident #ty_generics #where_clause {
                const DECLARATION: #krate::schema::Declaration = #krate::schema::Declaration {
                    name: #name,
                    path: ::core::concat!(::core::module_path!(), "::", #type_name),
                    attributes: &[#(#attributes),*],
                    bases: &[#(#bases),*],
                };
            }
        }
    }

    // Node
    // own attributes first, then each base in declaration order
    fn node_impl(&self) -> TokenStream {
        let Self { ident, krate, .. } = self;
        let generics = with_attribute_bounds(&self.generics, krate);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        let arms = self.attributes.iter().map(|attr| {
            let name = &attr.name;
            let value = match &attr.source {
                Source::Field(field) => quote!(&self.#field),
                Source::Accessor(method) => quote!(self.#method()),
            };

            quote! {
                #name => ::core::option::Option::Some(#krate::traits::AttrRef::new(#value)),
            }
        });

        let fallbacks = self.bases.iter().map(|base| {
            let member = &base.member;

            quote! {
                .or_else(|| #krate::traits::Node::attribute(&self.#member, name))
            }
        });

        quote! {
            impl #impl_generics #krate::traits::Node for #ident #ty_generics #where_clause {
                fn model_schema(&self) -> &'static #krate::schema::ModelSchema {
                    <Self as #krate::traits::Model>::schema()
                }

                fn as_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn attribute(
                    &self,
                    name: &str,
                ) -> ::core::option::Option<#krate::traits::AttrRef<'_>> {
                    match name {
                        #(#arms)*
                        _ => ::core::option::Option::None #(#fallbacks)*,
                    }
                }
            }
        }
    }

    // Attribute
    // lets a model sit behind another model's attribute
    fn attribute_impl(&self) -> TokenStream {
        let Self { ident, krate, .. } = self;
        let generics = with_attribute_bounds(&self.generics, krate);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics #krate::traits::Attribute for #ident #ty_generics #where_clause {
                fn value_any(&self) -> &dyn ::core::any::Any {
                    self
                }

                fn attr_eq(
                    &self,
                    other: &dyn #krate::traits::Attribute,
                ) -> ::core::result::Result<bool, #krate::ModelError> {
                    #krate::ops::attr_eq_node(self, other)
                }

                fn attr_hash(
                    &self,
                    state: &mut dyn ::core::hash::Hasher,
                ) -> ::core::result::Result<(), #krate::ModelError> {
                    #krate::ops::try_hash(self, state)
                }

                fn render(
                    &self,
                    ctx: &mut #krate::repr::ReprContext<'_>,
                ) -> ::core::fmt::Result {
                    #krate::repr::render_node(self, ctx)
                }

                fn as_node(&self) -> ::core::option::Option<&dyn #krate::traits::Node> {
                    ::core::option::Option::Some(self)
                }

                fn visit_nodes(
                    &self,
                    f: &mut dyn FnMut(&[usize], &dyn #krate::traits::Node),
                ) {
                    f(&[], self);
                }
            }
        }
    }

    // PartialEq, Eq, Hash, Debug, Display
    fn std_impls(&self) -> TokenStream {
        let Self { ident, krate, .. } = self;
        let generics = with_attribute_bounds(&self.generics, krate);
        let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

        quote! {
            impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
                fn eq(&self, other: &Self) -> bool {
                    #krate::ops::structural_eq(self, other)
                }
            }

            impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}

            impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    #krate::ops::structural_hash(self, state);
                }
            }

            impl #impl_generics ::core::fmt::Debug for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #krate::repr::fmt_node(self, f)
                }
            }

            impl #impl_generics ::core::fmt::Display for #ident #ty_generics #where_clause {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    #krate::repr::fmt_node(self, f)
                }
            }
        }
    }
}

///
/// TESTS
///
