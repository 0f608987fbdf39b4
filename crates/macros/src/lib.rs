use proc_macro::TokenStream;
use quote::quote;

#[derive(deluxe::ParseMetaItem)]
#[deluxe(attributes(candidate_reducer))]
struct ReducerAttributes(syn::Ident, #[deluxe(flatten)] ReducerNamedAttributes);

#[derive(deluxe::ParseMetaItem)]
struct ReducerNamedAttributes {
  name: String,
}

/// Declares a unit struct implementing `Reducer` around the annotated
/// `reduce` function, wrapped in a trace span named after the reducer.
#[proc_macro_attribute]
pub fn candidate_reducer(attrs: TokenStream, input: TokenStream) -> TokenStream {
  let ReducerAttributes(ident, ReducerNamedAttributes { name }) = match deluxe::parse2::<ReducerAttributes>(attrs.into()) {
    Ok(attrs) => attrs,
    Err(err) => return err.into_compile_error().into(),
  };

  let input = proc_macro2::TokenStream::from(input);

  quote! {
      pub(crate) struct #ident;

      impl Reducer for #ident {
        fn name(&self) -> &'static str {
            #name
        }

        #[tracing::instrument(level = "trace", name = #name, skip_all, fields(candidates = candidates.len()))]
        #input
      }
  }
  .into()
}
