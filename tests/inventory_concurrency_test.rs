mod common;

use common::TestApp;

// Twenty tasks race to take one unit each from a stock of ten. The
// conditional UPDATE guarantees exactly ten succeed and the quantity never
// goes negative.
#[tokio::test]
async fn concurrent_decrements_never_oversell() {
    let app = TestApp::new().await;
    app.seed_item("FUR013", "L-Shaped Sofa", 10).await;

    let mut tasks = vec![];
    for _ in 0..20 {
        let svc = app.state.inventory_service.clone();
        tasks.push(tokio::spawn(async move {
            svc.adjust_quantity("FUR013", -1).await.is_ok()
        }));
    }

    let mut successes = 0;
    for task in tasks {
        if task.await.unwrap_or(false) {
            successes += 1;
        }
    }

    assert_eq!(
        successes, 10,
        "exactly 10 decrements should succeed; got {}",
        successes
    );

    let item = app
        .state
        .inventory_service
        .get_item("FUR013")
        .await
        .expect("item should still exist");
    assert_eq!(item.quantity, 0);
}

// Mixed concurrent increments and order-style decrements settle at the
// arithmetic balance when everything can be satisfied.
#[tokio::test]
async fn concurrent_mixed_adjustments_are_consistent() {
    let app = TestApp::new().await;
    app.seed_item("FUR014", "TV Unit", 50).await;

    let mut tasks = vec![];
    for i in 0..10 {
        let svc = app.state.inventory_service.clone();
        let delta = if i % 2 == 0 { -4 } else { 2 };
        tasks.push(tokio::spawn(async move {
            svc.adjust_quantity("FUR014", delta).await.is_ok()
        }));
    }

    for task in tasks {
        assert!(task.await.unwrap_or(false));
    }

    // 50 - 5*4 + 5*2 = 40
    let item = app
        .state
        .inventory_service
        .get_item("FUR014")
        .await
        .expect("item should still exist");
    assert_eq!(item.quantity, 40);
}
