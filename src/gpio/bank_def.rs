use crate::register::Address;

macro_rules! banks {
    ($($X:ident: $pin:literal,)+) => { paste::item! {
        /// GPIO bank of an ATmega device.
        ///
        /// Every bank is a triple of consecutive registers `PINx`, `DDRx`
        /// and `PORTx`. Which banks exist depends on the device, see
        /// [`Bank::is_available`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        pub enum Bank {
            $(
                #[doc=concat!("Port ", stringify!($X))]
                $X,
            )+
        }

        impl Bank {
            /// Address of the input register (`PINx`)
            pub const fn pin(self) -> Address {
                match self {
                    $(Bank::$X => [<PIN $X>],)+
                }
            }

            /// Address of the direction register (`DDRx`)
            pub const fn ddr(self) -> Address {
                match self {
                    $(Bank::$X => [<DDR $X>],)+
                }
            }

            /// Address of the output register (`PORTx`)
            pub const fn port(self) -> Address {
                match self {
                    $(Bank::$X => [<PORT $X>],)+
                }
            }
        }

        $(
            #[doc=concat!("PIN", stringify!($X), " register")]
            pub const [<PIN $X>]: Address = $pin;
            #[doc=concat!("DDR", stringify!($X), " register")]
            pub const [<DDR $X>]: Address = $pin + 1;
            #[doc=concat!("PORT", stringify!($X), " register")]
            pub const [<PORT $X>]: Address = $pin + 2;
        )+
    }};
}

banks! {
    A: 0x20,
    B: 0x23,
    C: 0x26,
    D: 0x29,
    E: 0x2C,
    F: 0x2F,
    G: 0x32,
    H: 0x100,
    J: 0x103,
    K: 0x106,
    L: 0x109,
}
