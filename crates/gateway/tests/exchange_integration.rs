//! Integration test: LineStream <-> TCP exchange
//!
//! Tests the full round-trip over a real socket:
//! connect -> handshake -> trade updates in -> order commands out

use etc_core::{Side, TradeUpdate, WireOrder};
use etc_gateway::{
    ConnectionError, Endpoint, InboundMessage, LineStream, LineTransport, OutboundCommand,
    TransportError, decode, decode_command, encode,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Test handshake, inbound decode and outbound encode against a fake exchange
#[tokio::test]
async fn test_tcp_round_trip() {
    let _ = env_logger::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    // === Fake exchange ===
    let exchange = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        let (read, mut write) = socket.into_split();
        let mut lines = BufReader::new(read).lines();

        let hello = lines.next_line().await.unwrap().unwrap();
        write.write_all(b"HELLO STOCKOVERFLOW 0 BOND:0\n").await.unwrap();
        write.write_all(b"TRADE VALE 120 5\n").await.unwrap();

        let add = lines.next_line().await.unwrap().unwrap();
        (hello, add)
    });

    // === Client ===
    let endpoint = Endpoint {
        host: "127.0.0.1".to_string(),
        port,
    };
    let mut transport = LineStream::connect(&endpoint).await.unwrap();

    transport
        .send_line(&encode(&OutboundCommand::hello("stockoverflow")))
        .await
        .unwrap();

    let reply = decode(&transport.receive_line().await.unwrap()).unwrap();
    assert_eq!(reply.kind(), "HELLO");

    let trade = decode(&transport.receive_line().await.unwrap()).unwrap();
    assert_eq!(trade, InboundMessage::Trade(TradeUpdate::new("VALE", 120, 5)));

    let order = WireOrder {
        id: 1,
        symbol: "vale".to_string(),
        side: Side::Sell,
        price: 120,
        quantity: 2,
    };
    transport
        .send_line(&encode(&OutboundCommand::Add(order)))
        .await
        .unwrap();

    let (hello, add) = exchange.await.unwrap();
    assert_eq!(hello, "HELLO STOCKOVERFLOW");
    assert_eq!(add, "ADD 1 VALE SELL 120 2");

    // The exchange saw exactly what the codec would decode back
    match decode_command(&add).unwrap() {
        OutboundCommand::Add(order) => {
            assert_eq!(order.id, 1);
            assert_eq!(order.symbol, "VALE");
            assert_eq!(order.side, Side::Sell);
        }
        other => panic!("Wrong command: {:?}", other),
    }
}

/// Test that a dropped connection surfaces as a transport error
#[tokio::test]
async fn test_exchange_hangup_is_fatal() {
    let _ = env_logger::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let exchange = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        drop(socket);
    });

    let endpoint = Endpoint {
        host: "127.0.0.1".to_string(),
        port,
    };
    let mut transport = LineStream::connect(&endpoint).await.unwrap();
    exchange.await.unwrap();

    assert!(matches!(
        transport.receive_line().await,
        Err(TransportError::StreamClosed) | Err(TransportError::Receive(_))
    ));
}

/// Test that nothing listening is a connection error
#[tokio::test]
async fn test_connect_refused() {
    let _ = env_logger::try_init();

    // Bind then drop to find a port with no listener
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };

    let endpoint = Endpoint {
        host: "127.0.0.1".to_string(),
        port,
    };
    let result = LineStream::connect(&endpoint).await;
    assert!(matches!(result, Err(ConnectionError::Connect { .. })));
}
