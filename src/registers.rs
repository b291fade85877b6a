//! Register definitions for the LSM303C
//!
//! The LSM303C exposes two logical sub-devices behind one bus: the
//! accelerometer bank and the magnetometer/temperature bank. Both banks
//! reuse the same numeric register addresses (identity at 0x0F, control at
//! 0x20..=0x27, output at 0x28..=0x2D), so the register address type is
//! `u16` with the sub-device selector in the high byte:
//!
//! - **0x00xx**: accelerometer bank (I2C slave 0x1D)
//! - **0x01xx**: magnetometer/temperature bank (I2C slave 0x1E)
//!
//! The selector keeps the two address spaces disjoint; a write can never
//! land in the wrong bank by numeric coincidence.

device_driver::create_device!(
    device_name: Lsm303c,
    dsl: {
        config {
            type RegisterAddressType = u16;
            type DefaultByteOrder = LE;
        }

        // ==================== ACCELEROMETER BANK ====================

        /// WHO_AM_I_A - Accelerometer identity register (0x0F)
        /// Expected value: 0x41
        register WhoAmIA {
            const ADDRESS = 0x000F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x41)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_A - Accelerometer control 1 (0x20)
        ///
        /// Axis enables, block data update, and output data rate.
        register CtrlRegOneA {
            const ADDRESS = 0x0020;
            const SIZE_BITS = 8;

            /// X-axis enable
            xen: bool = 0,
            /// Y-axis enable
            yen: bool = 1,
            /// Z-axis enable
            zen: bool = 2,
            /// Block data update (output registers latch until both bytes read)
            bdu: bool = 3,
            /// Output data rate select (0=power-down, 1..=6 = 10..952 Hz)
            odr: uint = 4..7,
            /// High-resolution mode
            hr: bool = 7,
        },

        /// CTRL_REG2_A - Accelerometer control 2 (0x21)
        ///
        /// High-pass filter configuration. Mapped but not driven by the
        /// configuration encoder.
        register CtrlRegTwoA {
            const ADDRESS = 0x0021;
            const SIZE_BITS = 8;

            /// High-pass filter on interrupt generators
            hp_int_sel: uint = 0..2,
            /// Filtered data selection
            fds: bool = 2,
            /// High-pass filter mode
            hpm: uint = 3..5,
            /// High-pass filter cutoff divider
            dfc: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG3_A - Accelerometer control 3 (0x22)
        ///
        /// Interrupt routing and FIFO enable. Mapped but not driven.
        register CtrlRegThreeA {
            const ADDRESS = 0x0022;
            const SIZE_BITS = 8;

            /// Data-ready signal on INT pin
            int_drdy: bool = 0,
            /// FIFO threshold interrupt
            int_fth: bool = 1,
            /// FIFO overrun interrupt
            int_ovr: bool = 2,
            /// Interrupt generator 1 on INT pin
            int_ig_one: bool = 3,
            /// Interrupt generator 2 on INT pin
            int_ig_two: bool = 4,
            /// Inactivity interrupt
            int_inact: bool = 5,
            /// Stop FIFO fill at threshold
            stop_fth: bool = 6,
            /// FIFO enable
            fifo_en: bool = 7,
        },

        /// CTRL_REG4_A - Accelerometer control 4 (0x23)
        ///
        /// Full-scale selection and anti-alias bandwidth.
        register CtrlRegFourA {
            const ADDRESS = 0x0023;
            const SIZE_BITS = 8;

            /// SPI serial interface mode
            sim: bool = 0,
            /// I2C interface disable
            i2c_disable: bool = 1,
            /// Register address auto-increment on multi-byte access
            if_add_inc: bool = 2,
            /// Bandwidth selected automatically from ODR
            scale_odr: bool = 3,
            /// Full-scale select (0b00=2g, 0b01=16g, 0b10=4g, 0b11=8g)
            fs: uint = 4..6,
            /// Anti-alias filter bandwidth
            bw: uint = 6..8,
        },

        /// CTRL_REG5_A - Accelerometer control 5 (0x24)
        register CtrlRegFiveA {
            const ADDRESS = 0x0024;
            const SIZE_BITS = 8;

            /// Push-pull / open-drain interrupt pad
            pp_od: bool = 0,
            /// Interrupt active level
            h_lactive: bool = 1,
            /// Self-test mode
            st: uint = 2..4,
            /// Output decimation
            dec: uint = 4..6,
            /// Soft reset (clears the control registers)
            soft_reset: bool = 6,
            /// Debug mode
            debug: bool = 7,
        },

        /// STATUS_A - Accelerometer status (0x27)
        register StatusA {
            const ADDRESS = 0x0027;
            const SIZE_BITS = 8;

            /// X-axis data available
            xda: bool = 0,
            /// Y-axis data available
            yda: bool = 1,
            /// Z-axis data available
            zda: bool = 2,
            /// All enabled axes have new data
            zyxda: bool = 3,
            /// X-axis overrun
            x_ovr: bool = 4,
            /// Y-axis overrun
            y_ovr: bool = 5,
            /// Z-axis overrun
            z_ovr: bool = 6,
            /// Overrun on any axis
            zyx_ovr: bool = 7,
        },

        /// OUT_X_A - Accelerometer X-axis output (0x28-0x29)
        ///
        /// Two's complement, low byte first. Read as one 2-byte burst so
        /// both halves belong to the same conversion.
        register OutXA {
            const ADDRESS = 0x0028;
            const SIZE_BITS = 16;

            /// Signed acceleration sample
            value: int = 0..16,
        },

        /// OUT_Y_A - Accelerometer Y-axis output (0x2A-0x2B)
        register OutYA {
            const ADDRESS = 0x002A;
            const SIZE_BITS = 16;

            /// Signed acceleration sample
            value: int = 0..16,
        },

        /// OUT_Z_A - Accelerometer Z-axis output (0x2C-0x2D)
        register OutZA {
            const ADDRESS = 0x002C;
            const SIZE_BITS = 16;

            /// Signed acceleration sample
            value: int = 0..16,
        },

        // ==================== MAGNETOMETER BANK ====================

        /// WHO_AM_I_M - Magnetometer identity register (0x0F)
        /// Expected value: 0x3D
        register WhoAmIM {
            const ADDRESS = 0x010F;
            const SIZE_BITS = 8;

            /// Device ID (should read 0x3D)
            who_am_i: uint = 0..8,
        },

        /// CTRL_REG1_M - Magnetometer control 1 (0x20)
        ///
        /// Temperature sensor enable, X/Y operative mode, and data rate.
        register CtrlRegOneM {
            const ADDRESS = 0x0120;
            const SIZE_BITS = 8;

            /// Self-test enable
            st: bool = 0,
            reserved_1: uint = 1..2,
            /// Output data rate select (0=lowest, 1..=6 per the rate table)
            do_rate: uint = 2..5,
            /// X/Y axes operative mode (0b10 = high-performance)
            om: uint = 5..7,
            /// Temperature sensor enable
            temp_en: bool = 7,
        },

        /// CTRL_REG2_M - Magnetometer control 2 (0x21)
        ///
        /// Full-scale selection and reset bits.
        register CtrlRegTwoM {
            const ADDRESS = 0x0121;
            const SIZE_BITS = 8;

            reserved_1_0: uint = 0..2,
            /// Soft reset (clears configuration and user registers)
            soft_rst: bool = 2,
            /// Reboot memory content
            reboot: bool = 3,
            reserved_4: uint = 4..5,
            /// Full-scale select (0b00=245, 0b01=500, 0b11=2000)
            fs: uint = 5..7,
            reserved_7: uint = 7..8,
        },

        /// CTRL_REG3_M - Magnetometer control 3 (0x22)
        ///
        /// Operating mode and interface options.
        register CtrlRegThreeM {
            const ADDRESS = 0x0122;
            const SIZE_BITS = 8;

            /// System operating mode (0b00=continuous, 0b01=single, 0b11=power-down)
            md: uint = 0..2,
            /// SPI serial interface mode
            sim: bool = 2,
            reserved_4_3: uint = 3..5,
            /// Low-power mode
            lp: bool = 5,
            reserved_6: uint = 6..7,
            /// I2C interface disable
            i2c_disable: bool = 7,
        },

        /// CTRL_REG4_M - Magnetometer control 4 (0x23)
        register CtrlRegFourM {
            const ADDRESS = 0x0123;
            const SIZE_BITS = 8;

            reserved_0: uint = 0..1,
            /// Big/little endian data selection
            ble: bool = 1,
            /// Z-axis operative mode (0b10 = high-performance)
            omz: uint = 2..4,
            reserved_7_4: uint = 4..8,
        },

        /// CTRL_REG5_M - Magnetometer control 5 (0x24)
        register CtrlRegFiveM {
            const ADDRESS = 0x0124;
            const SIZE_BITS = 8;

            reserved_5_0: uint = 0..6,
            /// Block data update (output registers latch until both bytes read)
            bdu: bool = 6,
            reserved_7: uint = 7..8,
        },

        /// STATUS_M - Magnetometer status (0x27)
        register StatusM {
            const ADDRESS = 0x0127;
            const SIZE_BITS = 8;

            /// X-axis data available
            xda: bool = 0,
            /// Y-axis data available
            yda: bool = 1,
            /// Z-axis data available
            zda: bool = 2,
            /// All enabled axes have new data
            zyxda: bool = 3,
            /// X-axis overrun
            x_ovr: bool = 4,
            /// Y-axis overrun
            y_ovr: bool = 5,
            /// Z-axis overrun
            z_ovr: bool = 6,
            /// Overrun on any axis
            zyx_ovr: bool = 7,
        },

        /// OUT_X_M - Magnetometer X-axis output (0x28-0x29)
        ///
        /// Two's complement, low byte first.
        register OutXM {
            const ADDRESS = 0x0128;
            const SIZE_BITS = 16;

            /// Signed magnetic field sample
            value: int = 0..16,
        },

        /// OUT_Y_M - Magnetometer Y-axis output (0x2A-0x2B)
        register OutYM {
            const ADDRESS = 0x012A;
            const SIZE_BITS = 16;

            /// Signed magnetic field sample
            value: int = 0..16,
        },

        /// OUT_Z_M - Magnetometer Z-axis output (0x2C-0x2D)
        register OutZM {
            const ADDRESS = 0x012C;
            const SIZE_BITS = 16;

            /// Signed magnetic field sample
            value: int = 0..16,
        },

        /// TEMP - Temperature output (0x2E-0x2F, magnetometer bank)
        ///
        /// Two's complement, 8 LSB per °C, 0 at 25 °C.
        register TempM {
            const ADDRESS = 0x012E;
            const SIZE_BITS = 16;

            /// Signed temperature sample
            value: int = 0..16,
        },
    }
);
