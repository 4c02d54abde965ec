//! Concurrent append stress tests
//!
//! The store serializes all operations behind one lock. These tests check
//! that parallel writers never lose updates or leave a key's history in a
//! partially written state.

use std::sync::Arc;
use std::thread;

use chronokv::store::VersionedStore;

const WRITERS: usize = 8;
const PUTS_PER_WRITER: usize = 200;

/// Writers on distinct keys never corrupt each other's histories.
#[test]
fn test_concurrent_puts_distinct_keys() {
    let store = Arc::new(VersionedStore::new());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                let key = format!("key-{}", w);
                for i in 0..PUTS_PER_WRITER {
                    store.put(&key, &format!("v{}", i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    for w in 0..WRITERS {
        let key = format!("key-{}", w);
        let history = store.get_all(&key).unwrap();

        // No lost updates
        assert_eq!(history.len(), PUTS_PER_WRITER);

        // Each writer's values arrive in its own program order
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.value(), format!("v{}", i));
        }

        assert_eq!(store.get(&key).unwrap(), format!("v{}", PUTS_PER_WRITER - 1));
    }
}

/// Writers hammering one key produce a complete history with exactly one
/// live entry at the end.
#[test]
fn test_concurrent_puts_shared_key() {
    let store = Arc::new(VersionedStore::new());

    let handles: Vec<_> = (0..WRITERS)
        .map(|w| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..PUTS_PER_WRITER {
                    store.put("shared", &format!("w{}-v{}", w, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let history = store.get_all("shared").unwrap();
    assert_eq!(history.len(), WRITERS * PUTS_PER_WRITER);

    // Retire-before-append held across every interleaving
    let live = history.iter().filter(|e| e.is_live()).count();
    assert_eq!(live, 1);
    assert!(history.last().unwrap().is_live());

    for pair in history.windows(2) {
        assert!(pair[0].entered_at() <= pair[1].entered_at());
    }
}

/// Mixed readers and writers make progress without panics and observe only
/// complete entries.
#[test]
fn test_concurrent_reads_and_writes() {
    let store = Arc::new(VersionedStore::new());
    store.put("k", "seed");

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..PUTS_PER_WRITER {
                store.put("k", &format!("v{}", i));
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..PUTS_PER_WRITER {
                    if let Ok(history) = store.get_all("k") {
                        assert!(!history.is_empty());
                        // Snapshots are copies; every entry is fully formed
                        for entry in &history {
                            assert!(!entry.value().is_empty());
                        }
                        let live = history.iter().filter(|e| e.is_live()).count();
                        assert!(live <= 1);
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(
        store.get_all("k").unwrap().len(),
        PUTS_PER_WRITER + 1
    );
}
