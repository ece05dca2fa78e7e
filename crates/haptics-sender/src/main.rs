//! haptics-send: stream test positions to a running visualizer.
//!
//! Stands in for the robot: binds the port the visualizer expects datagrams
//! from and sends one 24-byte position per tick.

mod pattern;

use std::io;
use std::net::UdpSocket;
use std::process::ExitCode;
use std::thread::sleep;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use haptics_config::schema::WireByteOrder;
use haptics_ingress::wire::encode;

use crate::pattern::Pattern;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrderArg {
    Native,
    Little,
    Big,
}

impl From<ByteOrderArg> for WireByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Native => WireByteOrder::Native,
            ByteOrderArg::Little => WireByteOrder::Little,
            ByteOrderArg::Big => WireByteOrder::Big,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "haptics-send", version, about = "Stream test positions to haptics-viz")]
struct Args {
    /// Host running the visualizer.
    host: String,

    /// Visualizer's local port.
    #[arg(short, long, default_value_t = 5556)]
    port: u16,

    /// Port to send from; the visualizer only accepts this one.
    #[arg(long, default_value_t = 5557)]
    bind_port: u16,

    /// Datagrams per second.
    #[arg(short, long, default_value_t = 500.0)]
    rate: f64,

    /// Stop after this many datagrams.
    #[arg(short, long)]
    count: Option<u64>,

    #[arg(long, value_enum, default_value_t = ByteOrderArg::Native)]
    byte_order: ByteOrderArg,

    #[command(subcommand)]
    pattern: Option<Pattern>,
}

impl Args {
    fn interval(&self) -> Duration {
        if self.rate.is_finite() && self.rate > 0.0 {
            Duration::from_secs_f64(1.0 / self.rate)
        } else {
            Duration::from_millis(2)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "haptics_sender=info".into()),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(sent) => {
            tracing::info!(sent, "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Send failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> io::Result<u64> {
    let socket = UdpSocket::bind(("0.0.0.0", args.bind_port))?;
    socket.connect((args.host.as_str(), args.port))?;

    let pattern = args.pattern.clone().unwrap_or_default();
    let order = WireByteOrder::from(args.byte_order);
    let interval = args.interval();

    tracing::info!(
        local = %socket.local_addr()?,
        remote = %socket.peer_addr()?,
        rate = args.rate,
        ?pattern,
        "Sending positions"
    );

    let start = Instant::now();
    let mut next = start;
    let mut sent = 0u64;

    while args.count.map_or(true, |n| sent < n) {
        let values = pattern.sample(start.elapsed().as_secs_f64());
        match socket.send(&encode(values, order)) {
            Ok(_) => sent += 1,
            // Nobody listening yet; keep going until the visualizer starts.
            Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => {
                tracing::debug!("Visualizer not reachable: {e}");
            }
            Err(e) => return Err(e),
        }
        if sent > 0 && sent % 5000 == 0 {
            tracing::info!(sent, "Progress");
        }

        next += interval;
        let now = Instant::now();
        if next > now {
            sleep(next - now);
        } else {
            next = now;
        }
    }

    Ok(sent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_visualizer_ports() {
        let args = Args::try_parse_from(["haptics-send", "127.0.0.1"]).unwrap();
        assert_eq!(args.port, 5556);
        assert_eq!(args.bind_port, 5557);
        assert_eq!(args.rate, 500.0);
        assert_eq!(args.interval(), Duration::from_millis(2));
        assert_eq!(args.byte_order, ByteOrderArg::Native);
        assert!(args.pattern.is_none());
    }

    #[test]
    fn fixed_pattern_accepts_negative_values() {
        let args =
            Args::try_parse_from(["haptics-send", "wam", "fixed", "1.0", "-1.0", "2.0"]).unwrap();
        assert_eq!(
            args.pattern,
            Some(Pattern::Fixed {
                depth: 1.0,
                horizontal: -1.0,
                vertical: 2.0
            })
        );
    }

    #[test]
    fn circle_options_parse() {
        let args = Args::try_parse_from([
            "haptics-send",
            "wam",
            "--byte-order",
            "big",
            "circle",
            "--radius",
            "0.25",
            "--period",
            "2",
        ])
        .unwrap();
        assert_eq!(args.byte_order, ByteOrderArg::Big);
        assert_eq!(
            args.pattern,
            Some(Pattern::Circle {
                radius: 0.25,
                period: 2.0
            })
        );
    }

    #[test]
    fn bad_rate_falls_back_to_default_interval() {
        let mut args = Args::try_parse_from(["haptics-send", "wam"]).unwrap();
        args.rate = 0.0;
        assert_eq!(args.interval(), Duration::from_millis(2));
    }

    #[test]
    fn byte_order_maps_to_wire_order() {
        assert_eq!(WireByteOrder::from(ByteOrderArg::Little), WireByteOrder::Little);
        assert_eq!(WireByteOrder::from(ByteOrderArg::Big), WireByteOrder::Big);
    }

    #[test]
    fn run_sends_requested_count() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_secs(2)))
            .unwrap();
        let mut args = Args::try_parse_from([
            "haptics-send",
            "127.0.0.1",
            "--count",
            "3",
            "--rate",
            "1000",
            "fixed",
            "1",
            "2",
            "3",
        ])
        .unwrap();
        args.port = receiver.local_addr().unwrap().port();
        args.bind_port = 0;

        assert_eq!(run(&args).unwrap(), 3);

        let mut buf = [0u8; 64];
        for _ in 0..3 {
            let n = receiver.recv(&mut buf).unwrap();
            assert_eq!(n, 24);
            assert_eq!(
                haptics_ingress::wire::decode(&buf[..n], WireByteOrder::Native).unwrap(),
                [1.0, 2.0, 3.0]
            );
        }
    }
}
