use std::fmt::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stringpool=trace"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut sb = stringpool::get();
    for i in 0..255 {
        // formatting is slow next to plain appends, but it reads familiar
        let _ = writeln!(sb, "{i} + {:?}", char::from(i as u8));
    }

    println!("stringpool example:\n");
    print!("{sb}");
    println!("\nstringpool example\n");

    info!(len = sb.len(), capacity = sb.capacity(), "built text");
    stringpool::release(sb);
    info!(idle = stringpool::global().idle(), "returned builder to default pool");
}
