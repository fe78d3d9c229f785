use gloo_timers::callback::Timeout;
use yew::prelude::*;

const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notice. `seq` keeps two identical notices in a row distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
    pub seq: u32,
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: Option<ToastMessage>,
    pub on_dismiss: Callback<()>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |toast: &Option<ToastMessage>| {
                let timeout = toast
                    .as_ref()
                    .map(|_| Timeout::new(DISMISS_AFTER_MS, move || on_dismiss.emit(())));
                // dropping the timeout cancels it
                move || drop(timeout)
            },
            props.toast.clone(),
        );
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let kind_class = match toast.kind {
        ToastKind::Success => "toast-success",
        ToastKind::Error => "toast-error",
    };
    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status" onclick={dismiss}>
            <style>
                {r#"
                    .toast {
                        position: fixed;
                        bottom: 24px;
                        right: 24px;
                        z-index: 80;
                        padding: 12px 18px;
                        border-radius: 16px;
                        font-size: 14px;
                        cursor: pointer;
                        backdrop-filter: blur(12px);
                        animation: toastIn 0.25s ease-out;
                    }
                    .toast-success {
                        background: hsl(var(--primary) / 0.9);
                        color: #fff;
                    }
                    .toast-error {
                        background: rgba(180, 35, 35, 0.92);
                        color: #fff;
                    }
                    @keyframes toastIn {
                        from { transform: translateY(12px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                "#}
            </style>
            {&toast.text}
        </div>
    }
}
