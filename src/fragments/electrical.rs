use super::{Fragment, Pattern};
use crate::models::question::QuestionType::*;

pub(super) const PATTERNS: &[Pattern] = &[
    Pattern::new("Circuit Analysis", Conceptual, 3, "Explain how Thevenin equivalents simplify the analysis of {context}, why {constraint} matters, and what they miss during {scenario}."),
    Pattern::new("Circuit Analysis", Coding, 6, "Write a nodal-analysis solver for the DC network in {context} that handles {constraint}, and show how you would test it against {scenario}."),
    Pattern::new("Circuit Analysis", Debugging, 5, "A supply rail in {context} sags during {scenario}. Walk through your measurements, keeping {constraint} in mind."),
    Pattern::new("Circuit Analysis", Design, 6, "Design the input filter for {context} so it meets {constraint} and rejects the disturbances of {scenario}."),
    Pattern::new("Circuit Analysis", Optimization, 7, "Under {constraint}, how would you cut conduction losses in {context} while staying stable during {scenario}?"),
    Pattern::new("Power Systems", Conceptual, 5, "Explain how frequency regulation works for {context}, how {constraint} affects it, and what happens during {scenario}."),
    Pattern::new("Power Systems", System, 8, "Run a load-flow study plan for {context} that captures {scenario} and respects {constraint}."),
    Pattern::new("Power Systems", Design, 7, "Design the protection scheme for {context} so it clears faults during {scenario} and satisfies {constraint}."),
    Pattern::new("Power Systems", Scalability, 8, "How would you reinforce {context} to host twice the renewable capacity, through {scenario} and within {constraint}?"),
    Pattern::new("Power Systems", Debugging, 7, "Relays in {context} trip unexpectedly during {scenario}. How would you investigate under {constraint}?"),
    Pattern::new("Power Electronics", Conceptual, 4, "Explain why switching frequency trades efficiency against size in {context}, how {constraint} tilts the balance, and what stresses appear during {scenario}."),
    Pattern::new("Power Electronics", Design, 7, "Design the inverter stage for {context} so it honours {constraint} and rides through {scenario}."),
    Pattern::new("Power Electronics", Debugging, 8, "MOSFETs in {context} fail after {scenario}. How would you find the failure mechanism, given {constraint}?"),
    Pattern::new("Power Electronics", Optimization, 8, "How would you raise the power density of {context} under {constraint} without overheating during {scenario}?"),
    Pattern::new("Power Electronics", Security, 6, "During {scenario}, how would you keep technicians safe from stored energy in {context} while meeting {constraint}?"),
    Pattern::new("Control Systems", Conceptual, 4, "Explain what phase margin tells you about the loop in {context}, how {constraint} erodes it, and what happens during {scenario}."),
    Pattern::new("Control Systems", Coding, 7, "Write a discrete PID controller for {context} with anti-windup that respects {constraint}, and explain how it responds to {scenario}."),
    Pattern::new("Control Systems", Design, 6, "Tune the control loops of {context} to meet {constraint} and reject the disturbance from {scenario}."),
    Pattern::new("Control Systems", Debugging, 7, "The loop in {context} starts oscillating during {scenario}. How would you diagnose it under {constraint}?"),
    Pattern::new("Control Systems", Architecture, 9, "Architect a supervisory control layer for {context} that satisfies {constraint} and fails safe during {scenario}."),
    Pattern::new("Embedded Systems", Coding, 5, "Write the interrupt-driven firmware that samples sensors in {context} under {constraint}, and show how it behaves during {scenario}."),
    Pattern::new("Embedded Systems", Design, 6, "Choose the microcontroller and memory map for {context} so it meets {constraint} and survives {scenario}."),
    Pattern::new("Embedded Systems", Debugging, 8, "A watchdog reset hits {context} only during {scenario}. How would you find the cause, given {constraint}?"),
    Pattern::new("Embedded Systems", Security, 8, "How would you secure the firmware update path of {context} against tampering during {scenario} while honouring {constraint}?"),
    Pattern::new("Embedded Systems", Behavioral, 4, "Tell me about a time you shipped firmware for something like {context} under {constraint}. What went wrong during {scenario}?"),
    Pattern::new("Signal Processing", Conceptual, 5, "Explain how aliasing would corrupt measurements in {context}, how {constraint} limits your sampling choices, and what changes during {scenario}."),
    Pattern::new("Signal Processing", Coding, 7, "Implement an FIR filter pipeline for {context} that meets {constraint}, and explain how it handles {scenario}."),
    Pattern::new("Signal Processing", Optimization, 7, "How would you reduce the compute cost of the DSP chain in {context} under {constraint} without losing fidelity during {scenario}?"),
    Pattern::new("Signal Processing", System, 6, "Design the end-to-end acquisition chain for {context} so it keeps working through {scenario} within {constraint}."),
    Pattern::new("Signal Processing", Debugging, 6, "Spurious tones appear in the spectrum from {context} during {scenario}. How would you trace them under {constraint}?"),
    Pattern::new("Electromagnetics & RF", Conceptual, 6, "Explain how impedance mismatch affects {context}, why {constraint} makes it worse, and what you would see during {scenario}."),
    Pattern::new("Electromagnetics & RF", Design, 8, "Design the antenna and matching network for {context} to meet {constraint} and stay robust during {scenario}."),
    Pattern::new("Electromagnetics & RF", Debugging, 7, "After {scenario}, {context} fails radiated-emissions testing. How would you locate the source, given {constraint}?"),
    Pattern::new("Electromagnetics & RF", Security, 7, "How would you harden {context} against jamming or spoofing during {scenario} while meeting {constraint}?"),
    Pattern::new("Electromagnetics & RF", Scalability, 6, "How would you scale {context} from a lab prototype to a city-wide deployment through {scenario}, within {constraint}?"),
    Pattern::new("Machines & Drives", Conceptual, 3, "Explain how slip determines torque in the induction motor of {context}, how {constraint} shapes the choice, and what happens during {scenario}."),
    Pattern::new("Machines & Drives", Design, 6, "Size the motor and drive for {context} so it meets {constraint} and handles {scenario}."),
    Pattern::new("Machines & Drives", Optimization, 7, "How would you cut energy use in {context} with variable-speed drives under {constraint}, while staying stable during {scenario}?"),
    Pattern::new("Machines & Drives", Architecture, 8, "Lay out the electrical architecture of {context} so it satisfies {constraint} and keeps critical loads alive through {scenario}."),
    Pattern::new("Machines & Drives", Behavioral, 5, "Describe how you would coordinate with mechanical engineers on {context} during {scenario} when {constraint} limits the design space."),
];

pub(super) const CONTEXTS: &[Fragment] = &[
    Fragment::new("Grid", 8, "a 400 kV transmission substation"),
    Fragment::new("Grid", 7, "a rural distribution feeder"),
    Fragment::new("Grid", 7, "a utility-scale battery storage site"),
    Fragment::new("Grid", 8, "an offshore wind export cable"),
    Fragment::new("Grid", 6, "a campus microgrid"),
    Fragment::new("Buildings", 4, "a commercial building switchboard"),
    Fragment::new("Buildings", 5, "an emergency lighting system"),
    Fragment::new("Buildings", 6, "a hospital uninterruptible power supply"),
    Fragment::new("Transport", 7, "an electric vehicle traction inverter"),
    Fragment::new("Transport", 6, "a fast-charging station"),
    Fragment::new("Transport", 7, "a railway traction supply"),
    Fragment::new("Transport", 8, "an aircraft power distribution unit"),
    Fragment::new("Industry", 6, "a steel-mill arc furnace supply"),
    Fragment::new("Industry", 5, "a factory motor control centre"),
    Fragment::new("Industry", 6, "a water-pumping station drive"),
    Fragment::new("Devices", 4, "a smartphone battery charger"),
    Fragment::new("Devices", 5, "a wearable heart-rate monitor"),
    Fragment::new("Devices", 6, "a medical infusion pump"),
    Fragment::new("Devices", 3, "a smart thermostat"),
    Fragment::new("Communications", 7, "a 5G small-cell radio"),
    Fragment::new("Communications", 6, "a satellite ground terminal"),
    Fragment::new("Communications", 5, "a LoRaWAN sensor network"),
    Fragment::new("Communications", 7, "a radar front end"),
    Fragment::new("Renewables", 6, "a rooftop solar inverter"),
    Fragment::new("Renewables", 7, "a wind turbine pitch control system"),
    Fragment::new("Renewables", 6, "a hydro plant excitation system"),
    Fragment::new("Automation", 6, "a robotic arm servo drive"),
    Fragment::new("Automation", 5, "a PLC-controlled bottling line"),
    Fragment::new("Automation", 7, "a semiconductor fab tool controller"),
    Fragment::new("Automation", 4, "an automated parking barrier"),
];

pub(super) const CONSTRAINTS: &[Fragment] = &[
    Fragment::new("Standards", 6, "IEC 61000 EMC limits"),
    Fragment::new("Standards", 7, "IEEE 1547 interconnection rules"),
    Fragment::new("Standards", 6, "IEC 60601 medical safety"),
    Fragment::new("Standards", 5, "UL 1741 certification"),
    Fragment::new("Standards", 7, "grid-code fault ride-through requirements"),
    Fragment::new("Power", 5, "a 2 W standby budget"),
    Fragment::new("Power", 6, "98% conversion efficiency"),
    Fragment::new("Power", 4, "a single-phase supply only"),
    Fragment::new("Power", 7, "a 1 MW peak demand cap"),
    Fragment::new("Thermal", 6, "passive cooling only"),
    Fragment::new("Thermal", 7, "a 125 degree C junction limit"),
    Fragment::new("Thermal", 5, "a sealed IP67 enclosure"),
    Fragment::new("Cost", 4, "a bill of materials under 10 dollars"),
    Fragment::new("Cost", 5, "reuse of the existing PCB"),
    Fragment::new("Cost", 3, "a two-layer board"),
    Fragment::new("Timing", 7, "a 10 microsecond control deadline"),
    Fragment::new("Timing", 6, "synchronisation to GPS time"),
    Fragment::new("Timing", 5, "a 1 kHz sampling limit"),
    Fragment::new("Reliability", 7, "a SIL 2 safety integrity level"),
    Fragment::new("Reliability", 6, "N-1 redundancy"),
    Fragment::new("Reliability", 7, "a 15-year field life"),
    Fragment::new("Reliability", 8, "radiation-tolerant components"),
    Fragment::new("Size", 5, "a 20 by 20 mm board area"),
    Fragment::new("Size", 6, "a fixed cabinet footprint"),
    Fragment::new("Size", 4, "a coin-cell battery"),
    Fragment::new("Spectrum", 6, "a licence-exempt 868 MHz band"),
    Fragment::new("Spectrum", 7, "a strict adjacent-channel leakage limit"),
    Fragment::new("Security", 6, "signed firmware only"),
    Fragment::new("Security", 7, "an IEC 62443 security level"),
    Fragment::new("Grid", 6, "a weak grid with low short-circuit ratio"),
];

pub(super) const SCENARIOS: &[Fragment] = &[
    Fragment::new("Fault", 8, "a three-phase short circuit"),
    Fragment::new("Fault", 7, "a single line-to-ground fault"),
    Fragment::new("Fault", 6, "a blown fuse upstream"),
    Fragment::new("Fault", 7, "an insulation breakdown"),
    Fragment::new("Fault", 8, "an arc-flash incident"),
    Fragment::new("Grid", 6, "a voltage sag"),
    Fragment::new("Grid", 7, "a grid frequency excursion"),
    Fragment::new("Grid", 8, "a regional blackout and black start"),
    Fragment::new("Grid", 5, "harmonic pollution from a neighbour"),
    Fragment::new("Environment", 7, "a lightning strike nearby"),
    Fragment::new("Environment", 6, "a heatwave"),
    Fragment::new("Environment", 5, "condensation inside the enclosure"),
    Fragment::new("Environment", 7, "a geomagnetic storm"),
    Fragment::new("Load", 5, "a motor inrush on start-up"),
    Fragment::new("Load", 6, "a sudden loss of load"),
    Fragment::new("Load", 6, "peak evening demand"),
    Fragment::new("Load", 7, "simultaneous fast charging of a fleet"),
    Fragment::new("Interference", 6, "an electrostatic discharge"),
    Fragment::new("Interference", 7, "co-channel interference"),
    Fragment::new("Interference", 6, "a nearby radio transmitter"),
    Fragment::new("Security", 8, "a firmware supply-chain compromise"),
    Fragment::new("Security", 7, "a malicious command injection on the fieldbus"),
    Fragment::new("Change", 5, "a component obsolescence notice"),
    Fragment::new("Change", 4, "a late change to the enclosure"),
    Fragment::new("Change", 5, "a switch to a second-source supplier"),
    Fragment::new("Testing", 6, "a failed compliance test"),
    Fragment::new("Testing", 5, "a burn-in test campaign"),
    Fragment::new("Operations", 5, "a maintenance outage window"),
    Fragment::new("Operations", 6, "a field recall"),
    Fragment::new("Operations", 4, "an operator wiring error"),
];
