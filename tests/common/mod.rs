//! Shared test fixtures for the entitlement engine integration tests.
//!
//! Provides `setup_sdk()`, which builds an `AccessSdk` on a temporary store
//! directory with a scripted payment rail, plus a scripted checkout surface
//! and small catalog samples.

#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use medlearn_access::error::{AccessError, Result};
use medlearn_access::models::{
    CheckoutCompletion, CheckoutResult, Course, OrderReceipt, PaymentOrder, Question, Section,
    SectionBody, VerificationRequest, Video,
};
use medlearn_access::{AccessSdk, CheckoutSurface, PaymentRail};

// ---------------------------------------------------------------------------
// Scripted payment rail
// ---------------------------------------------------------------------------

/// Shared, inspectable script for the fake order/verification services.
pub struct RailScript {
    /// Orders created so far; order ids are `order-1`, `order-2`, ...
    pub orders_created: u32,
    /// When true, `create_order` fails like an unreachable order service.
    pub fail_order: bool,
    /// Verdict the verification service returns.
    pub verify_verdict: bool,
    /// When true, `verify` fails like a timed-out verification service.
    pub fail_verify: bool,
    /// Every verification request received, in order.
    pub verify_requests: Vec<VerificationRequest>,
}

impl Default for RailScript {
    fn default() -> Self {
        Self {
            orders_created: 0,
            fail_order: false,
            verify_verdict: true,
            fail_verify: false,
            verify_requests: Vec::new(),
        }
    }
}

pub struct ScriptedRail(pub Arc<Mutex<RailScript>>);

impl PaymentRail for ScriptedRail {
    fn create_order(&self, amount: u64, currency: &str) -> Result<OrderReceipt> {
        let mut script = self.0.lock().unwrap();
        if script.fail_order {
            return Err(AccessError::OrderRejected(
                "order service unavailable".to_string(),
            ));
        }
        script.orders_created += 1;
        Ok(OrderReceipt {
            order_id: format!("order-{}", script.orders_created),
            amount,
            currency: currency.to_string(),
        })
    }

    fn verify(&self, request: &VerificationRequest) -> Result<bool> {
        let mut script = self.0.lock().unwrap();
        script.verify_requests.push(request.clone());
        if script.fail_verify {
            return Err(AccessError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "verification service timed out",
            )));
        }
        Ok(script.verify_verdict)
    }
}

// ---------------------------------------------------------------------------
// Scripted checkout surface
// ---------------------------------------------------------------------------

/// What the fake checkout surface does with the next order it receives.
pub enum CheckoutScript {
    /// Report a captured payment (`pay-<orderId>` / `sig-<orderId>`).
    Pay,
    Fail(&'static str),
    Dismiss,
}

pub struct ScriptedCheckout {
    pub script: CheckoutScript,
    /// Orders the surface was shown, in order.
    pub seen: Vec<PaymentOrder>,
}

impl ScriptedCheckout {
    pub fn new(script: CheckoutScript) -> Self {
        Self {
            script,
            seen: Vec::new(),
        }
    }
}

impl CheckoutSurface for ScriptedCheckout {
    fn collect(&mut self, order: &PaymentOrder) -> CheckoutCompletion {
        self.seen.push(order.clone());
        let result = match self.script {
            CheckoutScript::Pay => CheckoutResult::Success {
                payment_id: format!("pay-{}", order.order_id),
                signature: format!("sig-{}", order.order_id),
            },
            CheckoutScript::Fail(reason) => CheckoutResult::Failure {
                reason: reason.to_string(),
            },
            CheckoutScript::Dismiss => CheckoutResult::Dismissed,
        };
        CheckoutCompletion {
            order_id: order.order_id.clone(),
            result,
        }
    }
}

// ---------------------------------------------------------------------------
// SDK fixtures
// ---------------------------------------------------------------------------

/// Build an SDK on a fresh temporary store directory with a scripted rail
/// that creates orders and verifies successfully by default.
///
/// Returns the SDK, a handle to the rail script for inspection/steering,
/// and the `TempDir` the caller must keep alive.
pub fn setup_sdk() -> (AccessSdk, Arc<Mutex<RailScript>>, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let (sdk, script) = sdk_at(tmp_dir.path());
    (sdk, script, tmp_dir)
}

/// Build an SDK over an existing store directory, simulating a reload of
/// the viewing session.
pub fn sdk_at(store_dir: &Path) -> (AccessSdk, Arc<Mutex<RailScript>>) {
    let script = Arc::new(Mutex::new(RailScript::default()));
    let sdk = AccessSdk::builder()
        .store_dir(store_dir)
        .rail(ScriptedRail(script.clone()))
        .build()
        .unwrap();
    (sdk, script)
}

// ---------------------------------------------------------------------------
// Catalog samples
// ---------------------------------------------------------------------------

pub fn video(id: &str, locked: bool, price: u64) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Lecture {}", id),
        source_url: format!("https://cdn.test/{}.m3u8", id),
        locked,
        price,
    }
}

pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "Which chamber pumps oxygenated blood into the aorta?",
            &["Right atrium", "Left ventricle", "Right ventricle"],
            1,
        )
        .unwrap(),
        Question::new(
            "Which valve separates the left atrium and left ventricle?",
            &["Mitral", "Tricuspid"],
            0,
        )
        .unwrap(),
    ]
}

/// A course with two locked sections: a video section and a quiz section.
pub fn course_with_sections() -> Course {
    Course {
        id: "c1".to_string(),
        title: "Cardiology basics".to_string(),
        locked: true,
        price: 49900,
        sections: vec![
            Section {
                id: "c1-intro".to_string(),
                title: "The cardiac cycle".to_string(),
                locked: true,
                price: 9900,
                body: SectionBody::Video {
                    video: video("c1-intro-video", false, 0),
                },
            },
            Section {
                id: "c1-quiz".to_string(),
                title: "Checkpoint quiz".to_string(),
                locked: true,
                price: 9900,
                body: SectionBody::Quiz {
                    questions: questions(),
                },
            },
        ],
    }
}
