use crate::cli::PlayArgs;
use crate::error::{CliError, Result};
use rosc::{OscMessage, OscPacket, OscType, encoder};
use sonifold::core::models::event::SonificationEvent;
use sonifold::workflows::sonify;
use std::net::UdpSocket;
use std::time::Duration;
use tracing::{debug, info};

// OSC addresses the receiving audio patch binds its parameters to.
const ADDR_B_FACTOR: &str = "/BFactor";
const ADDR_HYDROPHOBICITY: &str = "/hydrophobicity";
const ADDR_CATEGORY: &str = "/category";
const ADDR_STRUCT_TYPE: &str = "/structType";
const ADDR_NEW_CHAIN: &str = "/newChain";
const ADDR_NEW_ASYM: &str = "/newAsym";
const ADDR_NEW_ENTITY: &str = "/newEntity";

pub fn run(args: PlayArgs) -> Result<()> {
    let run = sonify::load(&args.input)?;
    if run.records.is_empty() {
        return Err(CliError::Argument(format!(
            "'{}' contains no side-chain atoms to sonify",
            args.input.display()
        )));
    }

    let socket = UdpSocket::bind("0.0.0.0:0")?;
    let target = format!("{}:{}", args.host, args.port);
    let interval = Duration::from_millis(args.interval_ms);
    info!(
        target = %target,
        records = run.records.len(),
        interval_ms = args.interval_ms,
        "Starting OSC playback."
    );

    let mut sent = 0usize;
    loop {
        for event in run.events() {
            let event = event?;
            send_event(&socket, &target, &event)?;
            sent += 1;
            debug!(sent, "Event sent.");
            if args.limit.is_some_and(|limit| sent >= limit) {
                info!(sent, "Event limit reached, stopping playback.");
                return Ok(());
            }
            // Fixed inter-event delay paces the audio engine; generation is
            // pull-based, so nothing beyond the in-flight event is computed.
            std::thread::sleep(interval);
        }
        if !args.repeat {
            break;
        }
        info!("Sequence finished, repeating from the first residue.");
    }

    info!(sent, "Playback finished.");
    Ok(())
}

fn send_event(socket: &UdpSocket, target: &str, event: &SonificationEvent) -> Result<()> {
    let messages = [
        (ADDR_B_FACTOR, OscType::Float(event.b_factor as f32)),
        (ADDR_HYDROPHOBICITY, OscType::Int(event.hydrophobicity)),
        (ADDR_CATEGORY, OscType::Int(event.category.code() as i32)),
        (
            ADDR_STRUCT_TYPE,
            OscType::Int(event.structure_type.code() as i32),
        ),
        (ADDR_NEW_CHAIN, OscType::Bool(event.new_chain)),
        (ADDR_NEW_ASYM, OscType::Bool(event.new_asym)),
        (ADDR_NEW_ENTITY, OscType::Bool(event.new_entity)),
    ];

    for (addr, value) in messages {
        let packet = OscPacket::Message(OscMessage {
            addr: addr.to_string(),
            args: vec![value],
        });
        let bytes = encoder::encode(&packet).map_err(|e| CliError::Transport(e.to_string()))?;
        socket.send_to(&bytes, target)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sonifold::core::models::event::{ResidueCategory, StructureType};

    #[test]
    fn send_event_emits_one_datagram_per_field() {
        let receiver = UdpSocket::bind("127.0.0.1:0").unwrap();
        receiver
            .set_read_timeout(Some(Duration::from_millis(500)))
            .unwrap();
        let target = receiver.local_addr().unwrap().to_string();
        let sender = UdpSocket::bind("127.0.0.1:0").unwrap();

        let event = SonificationEvent {
            hydrophobicity: 97,
            category: ResidueCategory::Aromatic,
            structure_type: StructureType::Sheet,
            b_factor: 25.5,
            new_chain: true,
            new_asym: false,
            new_entity: false,
        };
        send_event(&sender, &target, &event).unwrap();

        let mut buf = [0u8; 256];
        let mut addrs = Vec::new();
        for _ in 0..7 {
            let (len, _) = receiver.recv_from(&mut buf).unwrap();
            let (_, packet) = rosc::decoder::decode_udp(&buf[..len]).unwrap();
            match packet {
                OscPacket::Message(msg) => addrs.push(msg.addr),
                other => panic!("unexpected packet: {other:?}"),
            }
        }
        assert!(addrs.contains(&"/BFactor".to_string()));
        assert!(addrs.contains(&"/hydrophobicity".to_string()));
        assert!(addrs.contains(&"/newEntity".to_string()));
    }
}
