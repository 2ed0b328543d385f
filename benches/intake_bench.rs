//! Payment intake throughput benchmarks.
//!
//! The intake runner walks the whole notification inbox on every pass, so
//! both the registry dispatch and the per-source regex extraction are on
//! the hot path.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `dispatch` | Registry routing for matched and unmatched senders |
//! | `sources` | Full parse per provider template |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench intake_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fleetdesk_intake::{parse, RawEmail};
use std::hint::black_box;

fn zelle_mail() -> RawEmail {
    RawEmail::new(
        "Chase <no.reply.alerts@chase.com>",
        "You received money with Zelle(R)",
        r#"<h1 class="title">JANE DOE sent you money</h1>
           <table><tr><td>Amount</td><td> $250.00 </td></tr>
           <tr><td>Transaction number</td><td> 987654321 </td></tr>
           <tr><td>Memo</td><td> week 3 </td></tr></table>"#,
    )
}

fn cashapp_mail() -> RawEmail {
    RawEmail::new(
        "Cash App <cash@square.com>",
        "Jane Doe sent you $45 for gas",
        "Receipt #D-ABC123",
    )
}

fn venmo_mail() -> RawEmail {
    RawEmail::new(
        "Venmo <venmo@venmo.com>",
        "Jane Doe paid you $210.00",
        "<td class=\"quiet transaction-note\">week 4</td>\nTransaction ID: 4210987654321",
    )
}

fn chime_mail() -> RawEmail {
    RawEmail::new(
        "Chime <alerts@chime.com>",
        "Jane Doe just sent you money",
        "You received $85.00 for <strong>car payment</strong>",
    )
}

fn stripe_mail() -> RawEmail {
    RawEmail::new(
        "Stripe <notifications@stripe.com>",
        "Payment of $450.00 from Jane Doe",
        "Payment intent pi_3OaXb2K9 succeeded. 450.00 USD",
    )
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

fn dispatch_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");

    let matched = zelle_mail();
    let unmatched = RawEmail::new("billing@fleet.example.com", "Invoice 42", "n/a");

    group.throughput(Throughput::Elements(1));

    group.bench_with_input(BenchmarkId::new("matched", ""), &matched, |b, mail| {
        b.iter(|| black_box(parse(mail)))
    });

    group.bench_with_input(BenchmarkId::new("unmatched", ""), &unmatched, |b, mail| {
        b.iter(|| black_box(parse(mail)))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Per-source parses
// ---------------------------------------------------------------------------

fn sources_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sources");

    let mails = [
        ("zelle", zelle_mail()),
        ("cashapp", cashapp_mail()),
        ("venmo", venmo_mail()),
        ("chime", chime_mail()),
        ("stripe", stripe_mail()),
    ];

    group.throughput(Throughput::Elements(1));

    for (id, mail) in &mails {
        group.bench_with_input(BenchmarkId::new(*id, ""), mail, |b, mail| {
            b.iter(|| black_box(parse(mail)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(intake_benches, dispatch_bench, sources_bench);
criterion_main!(intake_benches);
