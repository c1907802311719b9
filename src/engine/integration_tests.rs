use serde_json::json;

use crate::backends::local::factory::LocalProcessorFactory;
use crate::codec;
use crate::engine::{Emission, ProcessorHost};
use crate::errors::{HostCall, HostError, ProcessorError};
use crate::term::{Term, TermMap};

/// Integration tests driving real local processors through the host
#[cfg(test)]
mod tests {
    use super::*;

    fn host_for(name: &str, options: serde_json::Value) -> (ProcessorHost, crate::engine::EmissionReceiver) {
        let options: TermMap = match codec::from_json(&options).unwrap() {
            Term::Map(map) => map,
            other => panic!("options must be a map, got {}", other),
        };
        let processor = LocalProcessorFactory::create_processor(name, &options)
            .expect("Failed to create processor");
        ProcessorHost::new(processor)
    }

    fn term(value: serde_json::Value) -> Term {
        codec::from_json(&value).unwrap()
    }

    #[tokio::test]
    async fn test_double_point_lifecycle() {
        let (mut host, mut emissions) =
            host_for("double", json!({"field": "val", "as": "doubled"}));

        assert_eq!(host.init(None).await.unwrap(), None);

        let reply = host
            .point(term(json!({"data": {"val": 3}, "id": "a"})))
            .await
            .unwrap();

        // The reply is not observed for double; only the emission counts.
        assert_eq!(reply, None);
        let emitted = emissions.try_recv().unwrap().into_term();
        assert_eq!(
            codec::to_json(&emitted).unwrap(),
            json!({"data": {"val": 3}, "id": "a", "doubled": 6})
        );
    }

    #[tokio::test]
    async fn test_double_batch_preserves_length_and_order() {
        let (mut host, mut emissions) =
            host_for("double", json!({"field": "val", "as": "doubled"}));
        host.init(None).await.unwrap();

        let values = [5, -2, 0, 11, 7];
        let batch: Vec<Term> = values
            .iter()
            .map(|v| term(json!({"data": {"val": v}})))
            .collect();

        host.batch(batch).await.unwrap();

        let emission = emissions.try_recv().unwrap();
        assert_eq!(emission.len(), values.len());
        let output = codec::to_json(&emission.into_term()).unwrap();
        let doubled: Vec<i64> = output
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["doubled"].as_i64().unwrap())
            .collect();
        assert_eq!(doubled, vec![10, -4, 0, 22, 14]);
        assert!(emissions.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_double_missing_field_surfaces_to_caller() {
        let (mut host, mut emissions) =
            host_for("double", json!({"field": "val", "as": "doubled"}));
        host.init(None).await.unwrap();

        let err = host.point(term(json!({"data": {}}))).await.unwrap_err();

        match err {
            HostError::Processor { call, source, .. } => {
                assert_eq!(call, HostCall::Point);
                assert_eq!(source, ProcessorError::missing("data.val"));
            }
            other => panic!("expected processor error, got {}", other),
        }
        assert!(emissions.try_recv().is_err());

        // Later points still go through.
        host.point(term(json!({"data": {"val": 1}}))).await.unwrap();
        assert!(matches!(emissions.try_recv(), Ok(Emission::Point(_))));
    }

    #[tokio::test]
    async fn test_mirror_round_trip() {
        let (mut host, mut emissions) = host_for("mirror", json!({"foo": "bar"}));

        let init_reply = host.init(Some(Term::atom("anything"))).await.unwrap().unwrap();
        assert_eq!(
            codec::to_json(&init_reply).unwrap(),
            json!({"eins": [1, 2, 3, 4], "zwei": 2, "drei": {"view": 3}})
        );

        let point = term(json!({"data": {"val": 3}, "id": "a"}));
        assert_eq!(host.point(point.clone()).await.unwrap(), Some(point.clone()));

        let batch = vec![point.clone(), term(json!({"other": [true, null]}))];
        assert_eq!(
            host.batch(batch.clone()).await.unwrap(),
            Some(Term::List(batch))
        );

        assert!(emissions.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropping_receiver_fails_emitting_processor() {
        let (mut host, emissions) =
            host_for("double", json!({"field": "val", "as": "doubled"}));
        host.init(None).await.unwrap();
        drop(emissions);

        let err = host.point(term(json!({"data": {"val": 1}}))).await.unwrap_err();
        assert!(matches!(
            err,
            HostError::Processor {
                source: ProcessorError::Emit(_),
                ..
            }
        ));
    }
}
