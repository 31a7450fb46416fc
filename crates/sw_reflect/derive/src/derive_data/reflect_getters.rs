use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, ReturnType, Signature, Type, Visibility};

use super::FieldAttributes;

// -----------------------------------------------------------------------------
// Define

/// A public method of a `#[reflect_getters]` impl block.
pub(crate) struct GetterMethod {
    pub ident: Ident,
    /// The name the method is exposed under.
    pub name: String,
    /// Whether the method can be called without arguments.
    pub getter: bool,
    /// Span of the return type, where `Reflect` bound errors are reported.
    pub output: Span,
}

/// A parsed `#[reflect_getters]` impl block.
///
/// `#[reflect(...)]` attributes are removed from `item`, so it can be
/// emitted as is.
pub(crate) struct ReflectGetters {
    pub item: ItemImpl,
    pub methods: Vec<GetterMethod>,
}

// -----------------------------------------------------------------------------
// Parsing

impl ReflectGetters {
    pub fn from_item(mut item: ItemImpl) -> syn::Result<Self> {
        if let Some((_, path, _)) = &item.trait_ {
            return Err(syn::Error::new_spanned(
                path,
                "`#[reflect_getters]` expects an inherent impl block",
            ));
        }

        let mut methods: Vec<GetterMethod> = Vec::new();
        for impl_item in &mut item.items {
            let ImplItem::Fn(func) = impl_item else {
                continue;
            };

            let attrs = FieldAttributes::parse_attrs(&func.attrs)?;
            func.attrs.retain(|attr| !FieldAttributes::is_reflect_attr(attr));

            if attrs.skip.is_some() || !matches!(func.vis, Visibility::Public(_)) {
                continue;
            }

            let name = match &attrs.rename {
                Some(rename) => rename.value(),
                None => func.sig.ident.unraw().to_string(),
            };
            if methods.iter().any(|method| method.name == name) {
                return Err(syn::Error::new_spanned(
                    &func.sig.ident,
                    format!("method name `{name}` is already in use"),
                ));
            }

            methods.push(GetterMethod {
                ident: func.sig.ident.clone(),
                name,
                getter: is_getter(func),
                output: match &func.sig.output {
                    ReturnType::Type(_, ty) => ty.span(),
                    ReturnType::Default => func.sig.ident.span(),
                },
            });
        }

        Ok(Self { item, methods })
    }
}

fn is_getter(func: &ImplItemFn) -> bool {
    let Signature {
        constness: _,
        asyncness,
        unsafety,
        abi,
        generics,
        inputs,
        variadic,
        output,
        ..
    } = &func.sig;

    if asyncness.is_some() || unsafety.is_some() || abi.is_some() || variadic.is_some() {
        return false;
    }
    if !generics.params.is_empty() {
        return false;
    }

    let mut inputs = inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver))
            if receiver.reference.is_some()
                && receiver.mutability.is_none()
                && receiver.colon_token.is_none() => {}
        _ => return false,
    }
    if inputs.next().is_some() {
        return false;
    }

    match output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => is_owned_value(ty),
    }
}

/// Whether `ty` can be boxed as a `'static` reflected value.
fn is_owned_value(ty: &Type) -> bool {
    match ty {
        Type::Paren(inner) => is_owned_value(&inner.elem),
        Type::Group(inner) => is_owned_value(&inner.elem),
        Type::Tuple(tuple) => !tuple.elems.is_empty(),
        Type::Reference(reference) => reference
            .lifetime
            .as_ref()
            .is_some_and(|lifetime| lifetime.ident == "static"),
        Type::ImplTrait(_) | Type::Never(_) | Type::Infer(_) | Type::TraitObject(_) => false,
        _ => true,
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::ReflectGetters;
    use syn::parse_quote;

    fn parse(item: syn::ItemImpl) -> Vec<(String, bool)> {
        ReflectGetters::from_item(item)
            .unwrap()
            .methods
            .into_iter()
            .map(|method| (method.name, method.getter))
            .collect()
    }

    #[test]
    fn classify_methods() {
        let methods = parse(parse_quote! {
            impl Foo {
                pub fn name(&self) -> String { todo!() }
                pub fn label(&self) -> &'static str { todo!() }
                pub fn borrowed(&self) -> &str { todo!() }
                pub fn unit(&self) {}
                pub fn empty(&self) -> () {}
                pub fn set(&mut self, value: u8) {}
                pub fn with(&self, value: u8) -> u8 { value }
                pub fn make() -> Self { todo!() }
                pub fn by_value(self) -> u8 { todo!() }
                pub fn iter(&self) -> impl Iterator<Item = u8> { todo!() }
                pub async fn later(&self) -> u8 { todo!() }
                pub fn generic<T>(&self) -> u8 { todo!() }
                fn private(&self) -> u8 { 0 }
                pub(crate) fn internal(&self) -> u8 { 0 }
            }
        });

        assert_eq!(
            methods,
            [
                ("name".to_string(), true),
                ("label".to_string(), true),
                ("borrowed".to_string(), false),
                ("unit".to_string(), false),
                ("empty".to_string(), false),
                ("set".to_string(), false),
                ("with".to_string(), false),
                ("make".to_string(), false),
                ("by_value".to_string(), false),
                ("iter".to_string(), false),
                ("later".to_string(), false),
                ("generic".to_string(), false),
            ]
        );
    }

    #[test]
    fn rename_and_skip() {
        let getters = ReflectGetters::from_item(parse_quote! {
            impl Foo {
                #[reflect(rename = "ID")]
                pub fn r#id(&self) -> u64 { 0 }
                #[reflect(skip)]
                pub fn hidden(&self) -> u64 { 0 }
                pub fn r#type(&self) -> u64 { 0 }
            }
        })
        .unwrap();

        let names: Vec<_> = getters.methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["ID", "type"]);

        let stripped = getters.item.items.iter().all(|item| match item {
            syn::ImplItem::Fn(func) => func.attrs.is_empty(),
            _ => true,
        });
        assert!(stripped);
    }

    #[test]
    fn skip_fallible_getter() {
        let getters = ReflectGetters::from_item(parse_quote! {
            impl Foo {
                #[reflect(skip)]
                pub fn audit(&self) -> Result<u8, String> { Ok(0) }
                pub fn check(&self) -> Result<u8, String> { Ok(0) }
            }
        })
        .unwrap();

        // `check` is still a getter and needs `Result<u8, String>: Reflect`.
        let methods: Vec<_> = getters
            .methods
            .iter()
            .map(|m| (m.name.as_str(), m.getter))
            .collect();
        assert_eq!(methods, [("check", true)]);
        assert_eq!(getters.item.items.len(), 2);
    }

    #[test]
    fn reject_trait_impl() {
        let result = ReflectGetters::from_item(parse_quote! {
            impl Default for Foo {
                fn default() -> Self { todo!() }
            }
        });
        assert!(result.is_err());
    }

    #[test]
    fn reject_duplicate_names() {
        let result = ReflectGetters::from_item(parse_quote! {
            impl Foo {
                pub fn a(&self) -> u8 { 0 }
                #[reflect(rename = "a")]
                pub fn b(&self) -> u8 { 0 }
            }
        });
        assert!(result.is_err());
    }
}
