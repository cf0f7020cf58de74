use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::{parse_macro_input, spanned::Spanned, ItemFn};

/// Runs an `async fn main` to completion with `seriatim::runtime::block_on`.
///
/// # Examples
///
/// ```ignore
/// #[seriatim::main]
/// async fn main() {
///     let list = [1, 2, 3];
///     seriatim::iter::each(&list, |n, _| async move {
///         println!("{n}");
///         std::ops::ControlFlow::<()>::Continue(())
///     })
///     .await;
/// }
/// ```
#[proc_macro_attribute]
pub fn attr_macro_main(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        return quote_spanned! { input.sig.fn_token.span()=>
            compile_error!("fn must be `async fn`");
        }
        .into();
    }

    if input.sig.ident != "main" {
        return quote_spanned! { input.sig.ident.span()=>
            compile_error!("only `async fn main` can be used for #[seriatim::main]");
        }
        .into();
    }

    if !input.sig.inputs.is_empty() {
        return quote_spanned! { input.sig.inputs.span()=>
            compile_error!("arguments to main are not supported");
        }
        .into();
    }
    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        pub fn main() #output {

            #(#attrs)*
            async fn __run() #output {
                #block
            }

            ::seriatim::runtime::block_on(async {
                __run().await
            })
        }
    }
    .into()
}

/// Turns an `async fn` into a `#[test]` which runs under
/// `seriatim::runtime::block_on`.
#[proc_macro_attribute]
pub fn attr_macro_test(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    if input.sig.asyncness.is_none() {
        return quote_spanned! { input.sig.fn_token.span()=>
            compile_error!("fn must be `async fn`");
        }
        .into();
    }

    let name = input.sig.ident;

    if !input.sig.inputs.is_empty() {
        return quote_spanned! { input.sig.inputs.span()=>
            compile_error!("arguments to tests are not supported");
        }
        .into();
    }
    let attrs = input.attrs;
    let output = input.sig.output;
    let block = input.block;
    quote! {
        #[test]
        #(#attrs)*
        pub fn #name() #output {
            async fn __run() #output {
                #block
            }

            ::seriatim::runtime::block_on(async {
                __run().await
            })
        }
    }
    .into()
}
