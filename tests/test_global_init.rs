use stringpool::{Config, Error};

// Runs in its own test binary so the default pool is untouched before `init`.
#[test]
fn init_default_pool_once() {
    let invalid = Config {
        buffer_capacity: 10,
        max_buffer_capacity: Some(1),
        ..Default::default()
    };
    assert!(matches!(
        stringpool::init(invalid),
        Err(Error::InvalidConfig { .. })
    ));

    let pool = stringpool::init(Config {
        prealloc: 3,
        buffer_capacity: 128,
        ..Default::default()
    })
    .unwrap();
    assert!(std::ptr::eq(pool, stringpool::global()));
    assert_eq!(pool.idle(), 3);

    let sb = stringpool::get();
    assert!(sb.capacity() >= 128);
    assert_eq!(pool.idle(), 2);
    stringpool::release(sb);
    assert_eq!(pool.idle(), 3);

    assert!(matches!(
        stringpool::init(Config::default()),
        Err(Error::AlreadyInitialized)
    ));
}
