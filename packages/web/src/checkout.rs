//! Bindings to the external Razorpay checkout widget.
//!
//! The backend creates an order, the order id is handed to the checkout
//! script, and the wait ends with the widget's verdict. No timeout runs while
//! the modal is open; only its own callbacks end the wait.

/// Publishable key baked in at build time.
pub const RAZORPAY_KEY_ID: &str = match option_env!("RAZORPAY_KEY_ID") {
    Some(key) => key,
    None => "",
};

#[derive(Clone, Debug)]
pub struct CheckoutOptions {
    pub order_id: String,
    /// Amount in rupees; the widget wants paise.
    pub amount: f64,
    pub description: String,
    pub prefill_name: String,
    pub prefill_email: String,
}

/// Signed payment ids from a successful checkout, fed to verification.
#[derive(Clone, Debug)]
pub struct CheckoutPayment {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}

#[derive(Clone, Debug)]
pub enum CheckoutOutcome {
    Paid(CheckoutPayment),
    Failed(String),
    Dismissed,
}

#[cfg(target_arch = "wasm32")]
pub use platform::open_checkout;

#[cfg(target_arch = "wasm32")]
mod platform {
    use js_sys::{Function, Object, Promise, Reflect};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    use super::{CheckoutOptions, CheckoutOutcome, CheckoutPayment, RAZORPAY_KEY_ID};

    const CHECKOUT_SCRIPT_URL: &str = "https://checkout.razorpay.com/v1/checkout.js";

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_name = Razorpay)]
        type Razorpay;

        #[wasm_bindgen(constructor, js_class = "Razorpay")]
        fn new(options: &JsValue) -> Razorpay;

        #[wasm_bindgen(method)]
        fn open(this: &Razorpay);

        #[wasm_bindgen(method)]
        fn on(this: &Razorpay, event: &str, handler: &Function);
    }

    /// Open the checkout modal and wait for its verdict.
    pub async fn open_checkout(options: CheckoutOptions) -> Result<CheckoutOutcome, String> {
        ensure_script_loaded().await?;

        let js_options = build_options(&options)?;
        let outcome = Promise::new(&mut |resolve: Function, _reject: Function| {
            if let Err(e) = wire_callbacks(&js_options, resolve) {
                tracing::error!("failed to wire checkout callbacks: {e:?}");
            }
        });

        let widget = Razorpay::new(&js_options);
        let failed_resolve = extract_resolve(&js_options)?;
        let failed_handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let description = Reflect::get(&response, &"error".into())
                .and_then(|err| Reflect::get(&err, &"description".into()))
                .ok()
                .and_then(|d| d.as_string())
                .unwrap_or_else(|| "Payment failed".to_string());
            let tagged = Object::new();
            let _ = Reflect::set(&tagged, &"kind".into(), &"failed".into());
            let _ = Reflect::set(&tagged, &"message".into(), &description.into());
            let _ = failed_resolve.call1(&JsValue::NULL, &tagged);
        });
        widget.on("payment.failed", failed_handler.as_ref().unchecked_ref());
        failed_handler.forget();

        widget.open();

        let verdict = JsFuture::from(outcome)
            .await
            .map_err(|_| "Payment gateway error".to_string())?;
        decode_verdict(&verdict)
    }

    /// Inject the checkout script once and wait for it.
    async fn ensure_script_loaded() -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        if Reflect::has(&window, &"Razorpay".into()).unwrap_or(false) {
            return Ok(());
        }

        let document = window.document().ok_or("no document")?;
        let loaded = Promise::new(&mut |resolve: Function, reject: Function| {
            let script = match document.create_element("script") {
                Ok(el) => el,
                Err(_) => {
                    let _ = reject.call0(&JsValue::NULL);
                    return;
                }
            };
            let _ = script.set_attribute("src", CHECKOUT_SCRIPT_URL);
            let _ = script.set_attribute("async", "true");

            let onload = Closure::<dyn FnMut()>::new(move || {
                let _ = resolve.call0(&JsValue::NULL);
            });
            let onerror = Closure::<dyn FnMut()>::new(move || {
                let _ = reject.call0(&JsValue::NULL);
            });
            let script: web_sys::HtmlScriptElement = script.unchecked_into();
            script.set_onload(Some(onload.as_ref().unchecked_ref()));
            script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
            onload.forget();
            onerror.forget();

            if let Some(body) = document.body() {
                let _ = body.append_child(&script);
            }
        });

        JsFuture::from(loaded)
            .await
            .map(|_| ())
            .map_err(|_| "Failed to load payment gateway".to_string())
    }

    /// Options object for the widget; the outcome-resolving callbacks are
    /// attached afterwards by [`wire_callbacks`].
    fn build_options(options: &CheckoutOptions) -> Result<JsValue, String> {
        let js = Object::new();
        let set = |key: &str, value: JsValue| {
            Reflect::set(&js, &key.into(), &value)
                .map(|_| ())
                .map_err(|_| "failed to build checkout options".to_string())
        };

        let paise = (options.amount * 100.0).round();
        set("key", RAZORPAY_KEY_ID.into())?;
        set("amount", paise.into())?;
        set("currency", "INR".into())?;
        set("name", "NeonPay Wallet TopUp".into())?;
        set("description", options.description.clone().into())?;
        set("order_id", options.order_id.clone().into())?;

        let prefill = Object::new();
        let _ = Reflect::set(&prefill, &"name".into(), &options.prefill_name.clone().into());
        let _ = Reflect::set(&prefill, &"email".into(), &options.prefill_email.clone().into());
        set("prefill", prefill.into())?;

        let theme = Object::new();
        let _ = Reflect::set(&theme, &"color".into(), &"#00ffff".into());
        set("theme", theme.into())?;

        Ok(js.into())
    }

    /// Attach the success handler and dismiss callback, both resolving the
    /// outcome promise with a tagged object. The resolve function is also
    /// stashed on the options object so the payment.failed handler can reach
    /// it.
    fn wire_callbacks(js_options: &JsValue, resolve: Function) -> Result<(), JsValue> {
        let success_resolve = resolve.clone();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let get = |key: &str| {
                Reflect::get(&response, &key.into())
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default()
            };
            let tagged = Object::new();
            let _ = Reflect::set(&tagged, &"kind".into(), &"paid".into());
            let _ = Reflect::set(&tagged, &"paymentId".into(), &get("razorpay_payment_id").into());
            let _ = Reflect::set(&tagged, &"orderId".into(), &get("razorpay_order_id").into());
            let _ = Reflect::set(&tagged, &"signature".into(), &get("razorpay_signature").into());
            let _ = success_resolve.call1(&JsValue::NULL, &tagged);
        });
        Reflect::set(js_options, &"handler".into(), handler.as_ref())?;
        handler.forget();

        let dismiss_resolve = resolve.clone();
        let ondismiss = Closure::<dyn FnMut()>::new(move || {
            let tagged = Object::new();
            let _ = Reflect::set(&tagged, &"kind".into(), &"dismissed".into());
            let _ = dismiss_resolve.call1(&JsValue::NULL, &tagged);
        });
        let modal = Object::new();
        Reflect::set(&modal, &"ondismiss".into(), ondismiss.as_ref())?;
        Reflect::set(js_options, &"modal".into(), &modal)?;
        ondismiss.forget();

        Reflect::set(js_options, &"__resolve".into(), &resolve)?;
        Ok(())
    }

    fn extract_resolve(js_options: &JsValue) -> Result<Function, String> {
        Reflect::get(js_options, &"__resolve".into())
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok())
            .ok_or_else(|| "Payment gateway error".to_string())
    }

    fn decode_verdict(verdict: &JsValue) -> Result<CheckoutOutcome, String> {
        let kind = Reflect::get(verdict, &"kind".into())
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        let get = |key: &str| {
            Reflect::get(verdict, &key.into())
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };
        match kind.as_str() {
            "paid" => Ok(CheckoutOutcome::Paid(CheckoutPayment {
                payment_id: get("paymentId"),
                order_id: get("orderId"),
                signature: get("signature"),
            })),
            "failed" => Ok(CheckoutOutcome::Failed(get("message"))),
            "dismissed" => Ok(CheckoutOutcome::Dismissed),
            _ => Err("Payment gateway error".to_string()),
        }
    }
}

/// The checkout widget only exists in the browser.
#[cfg(not(target_arch = "wasm32"))]
pub async fn open_checkout(_options: CheckoutOptions) -> Result<CheckoutOutcome, String> {
    Err("Checkout is only available in the browser".to_string())
}
