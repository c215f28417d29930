#![no_std]
#![no_main]

use brite_core::{CoreConfig, Event, EventCore, Palette};
use brite_rp2040::config::{self, BAUD_RATE, TICK_PERIOD_MS};
use brite_rp2040::{
    forward_bytes, forward_edges, Board, ByteQueue, EdgeQueue, FlashEeprom, PinButton,
    PwmColorOutput, QueuedBytes, UartEcho,
};
use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_futures::select::{select3, Either3};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART1;
use embassy_rp::pwm::{Pwm, PwmOutput};
use embassy_rp::uart::{Async, Config as UartConfig, Uart, UartRx};
use embassy_time::{Duration, Ticker};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

type BriteBoard = Board<'static, PwmOutput<'static>, PwmOutput<'static>, PwmOutput<'static>>;

/// Received command bytes, drained by the dispatcher ahead of anything else.
static BYTES: ByteQueue = ByteQueue::new();

/// Raw button edges.
static EDGES: EdgeQueue = EdgeQueue::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Brite starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- PWM Setup ---
    let (red, green) =
        Pwm::new_output_ab(p.PWM_SLICE1, p.PIN_2, p.PIN_3, config::pwm_config()).split();
    let (blue, _) = Pwm::new_output_a(p.PWM_SLICE2, p.PIN_4, config::pwm_config()).split();
    let light = PwmColorOutput::new(unwrap!(red), unwrap!(green), unwrap!(blue));

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BAUD_RATE;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (tx, rx) = uart.split();

    // --- Store and core ---
    let mut board = Board {
        light,
        echo: UartEcho::new(tx),
        store: FlashEeprom::new(p.FLASH),
    };

    let mut core = unwrap!(EventCore::new(Palette::DEFAULT, CoreConfig::DEFAULT));
    if let Err(e) = core.boot(&mut board) {
        warn!("boot: {:?}, showing first color", e);
    }

    info!("Brite initialized, color {}", core.active_index());

    let button = PinButton::new(Input::new(p.PIN_15, Pull::Up));

    // Spawn tasks (unwrap the SpawnToken, then spawn)
    spawner.spawn(uart_task(rx).unwrap());
    spawner.spawn(button_task(button).unwrap());
    spawner.spawn(dispatch_task(core, board).unwrap());
}

/// UART task - queues every received byte.
#[embassy_executor::task]
async fn uart_task(rx: UartRx<'static, Async>) {
    forward_bytes(rx, &BYTES).await
}

/// Button task - queues every pin edge with the level sampled after it.
#[embassy_executor::task]
async fn button_task(button: PinButton<Input<'static>>) {
    forward_edges(button, &EDGES).await
}

/// Dispatch task - the only owner of the event core and the hardware.
#[embassy_executor::task]
async fn dispatch_task(mut core: EventCore, mut board: BriteBoard) {
    let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));

    loop {
        let result = match select3(BYTES.receive(), EDGES.receive(), ticker.next()).await {
            Either3::First(byte) => {
                let first = core.handle(&mut board, Event::ByteReceived(byte));
                let rest = core.drain_serial(&mut board, &mut QueuedBytes::new(&BYTES));
                first.and(rest.map(|_| ()))
            }
            Either3::Second(level_is_low) => {
                core.handle(&mut board, Event::ButtonEdge { level_is_low })
            }
            Either3::Third(()) => core.handle(&mut board, Event::TimerTick),
        };

        if let Err(e) = result {
            warn!("dispatch: {:?}", e);
        }
    }
}
