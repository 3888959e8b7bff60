//! End-to-end tests for the order → advertisement workflow
//!
//! These tests drive the engine the way the UI does: create an order,
//! initiate its advertisement, then walk the approval state machine while
//! checking the audit trail.

use obitflow::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .try_init();
}

struct Harness {
    orders: Arc<InMemoryOrderStore>,
    ads: Arc<InMemoryAdvertisementStore>,
    audit: Arc<InMemoryAuditLog>,
    engine: WorkflowEngine,
}

fn harness() -> Harness {
    init_tracing();
    let orders = Arc::new(InMemoryOrderStore::new());
    let ads = Arc::new(InMemoryAdvertisementStore::new());
    let audit = Arc::new(InMemoryAuditLog::new());
    let engine = WorkflowEngine::new(
        orders.clone(),
        ads.clone(),
        audit.clone(),
        "torgeir.roness",
    );
    Harness {
        orders,
        ads,
        audit,
        engine,
    }
}

fn kari_nordmann() -> NewOrder {
    NewOrder {
        deceased: Deceased {
            first_name: "Kari".to_string(),
            last_name: "Nordmann".to_string(),
            ..Default::default()
        },
        ceremony: Ceremony {
            kind: "Begravelse".to_string(),
            ..Default::default()
        },
        publication: Some("Adresseavisen".to_string()),
        created_by: "tester".to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn full_approval_flow_leaves_audit_trail() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    assert_eq!(order.status, OrderStatus::Draft);
    assert!(!order.has_advertisement);

    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();
    assert_eq!(ad.status, AdStatus::Queued);
    assert_eq!(ad.display_name, "Kari Nordmann");

    h.engine.submit_for_approval(&ad.id).await.unwrap();
    let approved = h.engine.approve(&ad.id).await.unwrap();
    assert_eq!(approved.status, AdStatus::Approved);

    // newest first: Approved, then SentForApproval, then creation
    let trail = h.audit.find_by_entity(&ad.id).await.unwrap();
    let actions: Vec<AuditAction> = trail.iter().map(|e| e.action).collect();
    assert_eq!(
        actions,
        vec![
            AuditAction::Approved,
            AuditAction::SentForApproval,
            AuditAction::AdvertisementCreated,
        ]
    );
    assert!(trail.iter().all(|e| e.actor == "torgeir.roness"));
}

#[tokio::test]
async fn initiate_is_idempotent_and_flags_the_order() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();

    let first = h.engine.initiate_from_order(&order.id).await.unwrap();
    let second = h.engine.initiate_from_order(&order.id).await.unwrap();
    assert_eq!(first.id, second.id);

    let all = h.orders.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].has_advertisement);

    // only one creation entry despite two calls
    let trail = h.audit.find_by_entity(&first.id).await.unwrap();
    assert_eq!(trail.len(), 1);
    assert_eq!(trail[0].action, AuditAction::AdvertisementCreated);
}

#[tokio::test]
async fn rejection_requires_a_comment() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();
    h.engine.submit_for_approval(&ad.id).await.unwrap();

    for blank in ["", "   "] {
        let err = h.engine.reject(&ad.id, blank).await.unwrap_err();
        assert!(matches!(
            err,
            ObitError::Advertisement(AdError::CommentRequired)
        ));
        let unchanged = h.ads.get(&ad.id).await.unwrap().unwrap();
        assert_eq!(unchanged.status, AdStatus::SentForApproval);
        assert!(unchanged.rejection_comment.is_none());
    }

    let rejected = h.engine.reject(&ad.id, "needs more detail").await.unwrap();
    assert_eq!(rejected.status, AdStatus::Rejected);
    assert_eq!(rejected.rejection_comment.as_deref(), Some("needs more detail"));

    // exactly one Rejected entry, carrying the comment
    let trail = h.audit.find_by_entity(&ad.id).await.unwrap();
    let rejections: Vec<&AuditEntry> = trail
        .iter()
        .filter(|e| e.action == AuditAction::Rejected)
        .collect();
    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].details.as_deref(), Some("needs more detail"));
}

#[tokio::test]
async fn approve_is_permissive_from_queued() {
    // the source flow allows approving without a submission step;
    // preserved as observed
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();
    assert_eq!(ad.status, AdStatus::Queued);

    let approved = h.engine.approve(&ad.id).await.unwrap();
    assert_eq!(approved.status, AdStatus::Approved);
}

#[tokio::test]
async fn rejected_ad_can_be_resubmitted() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();

    h.engine.submit_for_approval(&ad.id).await.unwrap();
    h.engine.reject(&ad.id, "feil symbol").await.unwrap();

    let resubmitted = h.engine.submit_for_approval(&ad.id).await.unwrap();
    assert_eq!(resubmitted.status, AdStatus::SentForApproval);
    assert!(resubmitted.rejection_comment.is_none());

    let approved = h.engine.approve(&ad.id).await.unwrap();
    assert_eq!(approved.status, AdStatus::Approved);
}

#[tokio::test]
async fn change_publication_date_is_audited() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();

    let new_date = Utc::now() + chrono::Duration::days(3);
    let updated = h
        .engine
        .change_publication_date(&ad.id, new_date)
        .await
        .unwrap();
    assert_eq!(updated.publication_date, new_date);

    let trail = h.audit.find_by_entity(&ad.id).await.unwrap();
    assert_eq!(trail[0].action, AuditAction::PublicationDateChanged);
    assert_eq!(trail[0].details.as_deref(), Some(new_date.to_rfc3339().as_str()));
}

#[tokio::test]
async fn imported_ads_are_standalone_and_audited() {
    let h = harness();
    let ad = h
        .engine
        .import_advertisement(ImportedAd {
            supplier: "Adresseavisen feed".to_string(),
            kind: AdKind::Thanks,
            display_name: "Ola Hansen".to_string(),
            publication_date: Utc::now(),
            publication_venue: "Adresseavisen".to_string(),
        })
        .await
        .unwrap();

    assert!(ad.order_id.is_none());
    assert_eq!(ad.status, AdStatus::Queued);

    let trail = h.audit.find_by_entity(&ad.id).await.unwrap();
    assert_eq!(trail[0].action, AuditAction::AdvertisementImported);
    assert_eq!(trail[0].details.as_deref(), Some("Adresseavisen feed"));
}

#[tokio::test]
async fn operations_on_unknown_ids_fail_not_found() {
    let h = harness();
    let missing = Uuid::new_v4();

    assert_eq!(
        h.engine.submit_for_approval(&missing).await.unwrap_err().error_code(),
        "AD_NOT_FOUND"
    );
    assert_eq!(
        h.engine.approve(&missing).await.unwrap_err().error_code(),
        "AD_NOT_FOUND"
    );
    assert_eq!(
        h.engine.reject(&missing, "x").await.unwrap_err().error_code(),
        "AD_NOT_FOUND"
    );
    assert_eq!(
        h.engine
            .change_publication_date(&missing, Utc::now())
            .await
            .unwrap_err()
            .error_code(),
        "AD_NOT_FOUND"
    );
}

#[tokio::test]
async fn engine_stamps_the_acting_user() {
    let h = harness();
    let order = h.orders.create(kari_nordmann()).await.unwrap();
    let ad = h.engine.initiate_from_order(&order.id).await.unwrap();

    let as_saksbehandler = h.engine.with_actor("saksbehandler.to");
    as_saksbehandler.submit_for_approval(&ad.id).await.unwrap();

    let updated = h.ads.get(&ad.id).await.unwrap().unwrap();
    assert_eq!(updated.last_edited_by.as_deref(), Some("saksbehandler.to"));

    let trail = h.audit.find_by_entity(&ad.id).await.unwrap();
    assert_eq!(trail[0].actor, "saksbehandler.to");
}
