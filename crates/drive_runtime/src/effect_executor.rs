//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{
    reducer::{RuntimeEffect, ToastAction},
    runtime_context::DriveRuntimeContext,
};

/// Installs the executor that drains queued runtime effects in order.
pub fn install(runtime: DriveRuntimeContext) {
    // Clear the queue before running so effects dispatched while draining land in a new batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run(runtime, effect);
        }
    });
}

fn run(runtime: DriveRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::ExpireToast { id, after_ms } => spawn_local(async move {
            drive_web::pause(after_ms).await;
            runtime.dispatch_toast.call(ToastAction::Dismiss(id));
        }),
    }
}
