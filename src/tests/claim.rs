use crate::{Consumer, Producer, RingBuffer};
use alloc::sync::Arc;

#[test]
fn exclusive_ends() {
    let rb = Arc::new(RingBuffer::<i32>::new(4));

    let prod = Producer::try_claim(rb.clone()).ok().unwrap();
    assert!(rb.write_is_held());
    assert!(Producer::try_claim(rb.clone()).is_err());

    // The read end is claimed independently.
    let cons = Consumer::try_claim(rb.clone()).ok().unwrap();
    assert!(rb.read_is_held());
    assert!(Consumer::try_claim(rb.clone()).is_err());

    drop(prod);
    assert!(!rb.write_is_held());
    assert!(rb.read_is_held());

    drop(cons);
    assert!(!rb.read_is_held());
}

#[test]
fn reclaim_after_release() {
    let rb = Arc::new(RingBuffer::<i32>::new(2));

    {
        let mut prod = Producer::claim(rb.clone());
        prod.try_push(1).unwrap();
    }
    // A released end may be claimed again, claim() returns at once when free.
    let mut prod = Producer::claim(rb.clone());
    prod.try_push(2).unwrap();

    let mut cons = Consumer::claim(rb);
    assert_eq!(cons.try_pop(), Some(1));
    assert_eq!(cons.try_pop(), Some(2));
    assert_eq!(cons.try_pop(), None);
}

#[test]
fn try_claim_returns_ref() {
    let rb = Arc::new(RingBuffer::<i32>::new(2));

    let prod = Producer::try_claim(rb.clone()).ok().unwrap();
    let returned = match Producer::try_claim(rb.clone()) {
        Err(rb) => rb,
        Ok(_) => panic!("write end claimed twice"),
    };
    drop(prod);
    let _prod = Producer::try_claim(returned).ok().unwrap();
}

#[test]
fn split_ref_releases_on_drop() {
    let mut rb = RingBuffer::<i32>::new(2);
    {
        let (mut prod, _cons) = rb.split_ref();
        prod.try_push(5).unwrap();
    }
    assert!(!rb.write_is_held());
    assert!(!rb.read_is_held());

    let (_prod, mut cons) = rb.split_ref();
    assert_eq!(cons.try_pop(), Some(5));
}

#[test]
fn contents_survive_handles() {
    let rb = Arc::new(RingBuffer::<i32>::new(4));
    {
        let mut prod = Producer::claim(rb.clone());
        prod.try_push(7).unwrap();
        prod.try_push(8).unwrap();
    }
    let mut cons = Consumer::claim(rb);
    assert_eq!(cons.try_pop(), Some(7));
    assert_eq!(cons.try_pop(), Some(8));
}
