//! Integration tests for the stream-backed cursor.

mod common;

use coffer_client::StatusCode;

/// Populates keys "0".."9" mapped to their squares.
async fn populate_squares(client: &coffer_client::Client) {
    for digit in 0..10u32 {
        client
            .set(digit.to_string(), (digit * digit).to_string(), true)
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn traversal_visits_every_record_in_key_order() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    populate_squares(&client).await;

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();

    let mut visited = Vec::new();
    loop {
        match cursor.get_str().await {
            Ok(record) => visited.push(record),
            Err(status) => {
                assert_eq!(status, StatusCode::NotFoundError);
                break;
            }
        }
        cursor.next().await.unwrap();
    }

    assert_eq!(visited.len() as i64, client.count().await.unwrap());
    for (index, (key, value)) in visited.iter().enumerate() {
        assert_eq!(key, &index.to_string());
        assert_eq!(value, &(index * index).to_string());
    }
}

#[tokio::test]
async fn next_record_drains_the_store_as_a_sequence() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    populate_squares(&client).await;

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();

    let mut keys = Vec::new();
    while let Some((key, _value)) = cursor.next_record().await.unwrap() {
        keys.push(String::from_utf8(Vec::from(key)).unwrap());
    }
    assert_eq!(keys.len(), 10);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));

    // The sequence stays exhausted instead of erroring.
    assert_eq!(cursor.next_record().await.unwrap(), None);
}

#[tokio::test]
async fn first_and_last_position_the_ends() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    populate_squares(&client).await;

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "0");

    cursor.last().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "9");
    assert_eq!(cursor.get_value_str().await.unwrap(), "81");
}

#[tokio::test]
async fn jump_falls_back_to_the_lower_bound() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("b", "2"), ("d", "4"), ("f", "6")], true)
        .await
        .unwrap();

    let mut cursor = client.make_cursor().await.unwrap();

    cursor.jump("d").await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "d");

    // No exact match: an ordered backend lands on the first key >= "c".
    cursor.jump("c").await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "d");

    // Jumping past the end leaves the cursor unpositioned.
    cursor.jump("z").await.unwrap();
    assert_eq!(
        cursor.get().await.unwrap_err(),
        StatusCode::NotFoundError
    );
}

#[tokio::test]
async fn bounded_jumps_respect_inclusiveness() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("b", "2"), ("d", "4"), ("f", "6")], true)
        .await
        .unwrap();

    let mut cursor = client.make_cursor().await.unwrap();

    cursor.jump_lower("d", false).await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "b");
    cursor.jump_lower("d", true).await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "d");

    cursor.jump_upper("d", false).await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "f");
    cursor.jump_upper("d", true).await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "d");

    // Nothing below the smallest key: the call succeeds but the cursor is
    // unpositioned.
    cursor.jump_lower("a", false).await.unwrap();
    assert_eq!(
        cursor.get().await.unwrap_err(),
        StatusCode::NotFoundError
    );
}

#[tokio::test]
async fn next_and_previous_walk_both_directions() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("a", "1"), ("b", "2"), ("c", "3")], true)
        .await
        .unwrap();

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();
    cursor.next().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "b");
    cursor.next().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "c");
    cursor.previous().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "b");

    // Walking past the last record succeeds; the failure surfaces on the
    // following read, and moving again without a current record fails.
    cursor.last().await.unwrap();
    cursor.next().await.unwrap();
    assert_eq!(cursor.get().await.unwrap_err(), StatusCode::NotFoundError);
    assert_eq!(cursor.next().await.unwrap_err(), StatusCode::NotFoundError);
}

#[tokio::test]
async fn cursor_reads_do_not_advance() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client.set("only", "record", true).await.unwrap();

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();

    let (key, value) = cursor.get().await.unwrap();
    assert_eq!(key.as_ref(), b"only");
    assert_eq!(value.as_ref(), b"record");
    assert_eq!(cursor.get_key_str().await.unwrap(), "only");
    assert_eq!(cursor.get_value_str().await.unwrap(), "record");
    // Still on the same record after three reads.
    assert_eq!(cursor.get_str().await.unwrap().0, "only");
}

#[tokio::test]
async fn step_reads_then_advances() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("a", "1"), ("b", "2")], true)
        .await
        .unwrap();

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();

    assert_eq!(
        cursor.step_str().await.unwrap(),
        ("a".to_string(), "1".to_string())
    );
    assert_eq!(
        cursor.step_str().await.unwrap(),
        ("b".to_string(), "2".to_string())
    );
    assert_eq!(cursor.step().await.unwrap_err(), StatusCode::NotFoundError);
}

#[tokio::test]
async fn cursor_mutates_the_current_record() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("a", "1"), ("b", "2"), ("c", "3")], true)
        .await
        .unwrap();

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.jump("b").await.unwrap();
    cursor.set("two").await.unwrap();
    assert_eq!(client.get_str("b").await.unwrap(), "two");

    // Removal advances to the following record.
    cursor.remove().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "c");
    assert_eq!(
        client.get("b").await.unwrap_err(),
        StatusCode::NotFoundError
    );
    assert_eq!(client.count().await.unwrap(), 2);
}

#[tokio::test]
async fn empty_store_positions_succeed_and_reads_fail() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;

    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();
    assert_eq!(cursor.get().await.unwrap_err(), StatusCode::NotFoundError);
    cursor.last().await.unwrap();
    assert_eq!(cursor.get().await.unwrap_err(), StatusCode::NotFoundError);
    assert_eq!(cursor.next().await.unwrap_err(), StatusCode::NotFoundError);
}

#[tokio::test]
async fn cursors_keep_independent_positions() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client
        .set_multi(&[("a", "1"), ("b", "2"), ("c", "3")], true)
        .await
        .unwrap();

    let mut front = client.make_cursor().await.unwrap();
    let mut back = client.make_cursor().await.unwrap();
    front.first().await.unwrap();
    back.last().await.unwrap();

    assert_eq!(front.get_key_str().await.unwrap(), "a");
    assert_eq!(back.get_key_str().await.unwrap(), "c");

    front.next().await.unwrap();
    assert_eq!(front.get_key_str().await.unwrap(), "b");
    assert_eq!(back.get_key_str().await.unwrap(), "c");
}

#[tokio::test]
async fn dropping_a_cursor_leaves_the_connection_usable() {
    let addr = common::spawn_server(1).await;
    let client = common::connect_client(addr).await;
    client.set("k", "v", true).await.unwrap();

    {
        let mut cursor = client.make_cursor().await.unwrap();
        cursor.first().await.unwrap();
        assert_eq!(cursor.get_key_str().await.unwrap(), "k");
        // Dropping here closes the request feed and with it the stream.
    }

    assert_eq!(client.get_str("k").await.unwrap(), "v");
    let mut cursor = client.make_cursor().await.unwrap();
    cursor.first().await.unwrap();
    assert_eq!(cursor.get_key_str().await.unwrap(), "k");
}
