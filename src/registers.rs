//! Register definitions for the LPS25HB
//!
//! Every register the driver touches is declared once here, with its fixed address and
//! the bit range of each field. The generated field sets do the masking and shifting, so
//! the layout is independent of host byte order.
//!
//! ## Multi-byte registers
//! The sensor stores wide values little-endian: the low byte sits at the lower address.
//! `REF_P`, `PRESS_OUT`, `TEMP_OUT`, `THS_P` and `RPDS` are declared as single wide
//! registers so they are always transferred in one contiguous access.

device_driver::create_device!(
    device_name: Lps25hbRegisters,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// REF_P_XL/L/H - Reference pressure (0x08-0x0A)
        ///
        /// 24-bit two's complement value subtracted from the measured pressure when
        /// autozero is enabled.
        register RefP {
            const ADDRESS = 0x08;
            const SIZE_BITS = 24;

            /// Reference pressure, two's complement
            refp: uint = 0..24,
        },

        /// WHO_AM_I - Device identification (0x0F)
        /// Expected value: 0xBD
        register WhoAmI {
            const ADDRESS = 0x0F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0xBD)
            who_am_i: uint = 0..8,
        },

        /// RES_CONF - Resolution configuration (0x10)
        register ResConf {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;

            /// Pressure internal averaging
            avgp: uint = 0..2,
            /// Temperature internal averaging
            avgt: uint = 2..4,
            reserved_7_4: uint = 4..8,
        },

        /// CTRL_REG1 - Control register 1 (0x20)
        register CtrlReg1 {
            const ADDRESS = 0x20;
            const SIZE_BITS = 8;

            /// SPI serial interface mode (0 = 4-wire, 1 = 3-wire)
            sim: bool = 0,
            /// Reset autozero function
            reset_az: bool = 1,
            /// Block data update
            bdu: bool = 2,
            /// Enable interrupt generation
            diff_en: bool = 3,
            /// Power-down control (bit 7) and output data rate (bits 6:4)
            odr: uint = 4..8,
        },

        /// CTRL_REG2 - Control register 2 (0x21)
        register CtrlReg2 {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// One-shot enable, self-clearing once the conversion completes
            one_shot: bool = 0,
            /// Autozero enable
            autozero: bool = 1,
            /// Software reset, self-clearing
            swreset: bool = 2,
            /// Disable the I2C interface
            i2c_dis: bool = 3,
            /// Enable the 1 Hz ODR decimation in FIFO mean mode
            fifo_mean_dec: bool = 4,
            /// Stop filling the FIFO at the watermark level
            stop_on_fth: bool = 5,
            /// FIFO enable
            fifo_en: bool = 6,
            /// Reboot memory content, self-clearing
            boot: bool = 7,
        },

        /// CTRL_REG3 - Interrupt control (0x22)
        register CtrlReg3 {
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// Data signal routed to the INT_DRDY pin
            int_s: uint = 0..2,
            reserved_5_2: uint = 2..6,
            /// Push-pull (0) or open-drain (1)
            pp_od: bool = 6,
            /// Interrupt active high (0) or active low (1)
            int_h_l: bool = 7,
        },

        /// CTRL_REG4 - Interrupt configuration (0x23)
        register CtrlReg4 {
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Data-ready signal on INT_DRDY
            drdy: bool = 0,
            /// FIFO overrun signal on INT_DRDY
            f_ovr: bool = 1,
            /// FIFO watermark signal on INT_DRDY
            f_fth: bool = 2,
            /// FIFO empty signal on INT_DRDY
            f_empty: bool = 3,
            reserved_7_4: uint = 4..8,
        },

        /// INTERRUPT_CFG - Pressure threshold interrupt configuration (0x24)
        register InterruptCfg {
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Differential pressure low (bit 1) and high (bit 0) event enables
            pe: uint = 0..2,
            /// Latch interrupt request into INT_SOURCE
            lir: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// INT_SOURCE - Interrupt source (0x25)
        register IntSource {
            const ADDRESS = 0x25;
            const SIZE_BITS = 8;

            /// Differential pressure high
            ph: bool = 0,
            /// Differential pressure low
            pl: bool = 1,
            /// Interrupt active
            ia: bool = 2,
            reserved_7_3: uint = 3..8,
        },

        /// STATUS_REG - Data status (0x27)
        register StatusReg {
            const ADDRESS = 0x27;
            const SIZE_BITS = 8;

            /// Temperature data available
            t_da: bool = 0,
            /// Pressure data available
            p_da: bool = 1,
            reserved_3_2: uint = 2..4,
            /// Temperature data overrun
            t_or: bool = 4,
            /// Pressure data overrun
            p_or: bool = 5,
            reserved_7_6: uint = 6..8,
        },

        /// PRESS_OUT_XL/L/H - Pressure output (0x28-0x2A)
        register PressOut {
            const ADDRESS = 0x28;
            const SIZE_BITS = 24;

            /// Raw 24-bit pressure sample
            press: uint = 0..24,
        },

        /// TEMP_OUT_L/H - Temperature output (0x2B-0x2C)
        register TempOut {
            const ADDRESS = 0x2B;
            const SIZE_BITS = 16;

            /// Raw 16-bit two's complement temperature sample
            temp: int = 0..16,
        },

        /// FIFO_CTRL - FIFO control (0x2E)
        register FifoCtrl {
            const ADDRESS = 0x2E;
            const SIZE_BITS = 8;

            /// FIFO watermark level
            wtm_point: uint = 0..5,
            /// FIFO mode selection
            f_mode: uint = 5..8,
        },

        /// FIFO_STATUS - FIFO status (0x2F)
        register FifoStatus {
            const ADDRESS = 0x2F;
            const SIZE_BITS = 8;

            /// Number of unread samples stored in the FIFO
            fss: uint = 0..5,
            /// FIFO is empty
            empty_fifo: bool = 5,
            /// FIFO is full and at least one sample was overwritten
            ovr: bool = 6,
            /// FIFO filling is equal to or higher than the watermark level
            fth_fifo: bool = 7,
        },

        /// THS_P_L/H - Pressure threshold for interrupt generation (0x30-0x31)
        register ThsP {
            const ADDRESS = 0x30;
            const SIZE_BITS = 16;

            /// Unsigned threshold, compared against the differential pressure
            ths: uint = 0..16,
        },

        /// RPDS_L/H - Pressure offset after soldering (0x39-0x3A)
        register Rpds {
            const ADDRESS = 0x39;
            const SIZE_BITS = 16;

            /// Signed pressure offset
            rpds: int = 0..16,
        }
    }
);
