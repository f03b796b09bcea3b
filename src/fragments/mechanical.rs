use super::{Fragment, Pattern};
use crate::models::question::QuestionType::*;

pub(super) const PATTERNS: &[Pattern] = &[
    Pattern::new("Thermodynamics", Conceptual, 4, "Explain how the second law limits the efficiency of {context}, why {constraint} matters, and what shifts during {scenario}."),
    Pattern::new("Thermodynamics", Design, 7, "Design the thermodynamic cycle for {context} so it meets {constraint} and keeps running through {scenario}."),
    Pattern::new("Thermodynamics", Optimization, 8, "Under {constraint}, how would you raise the exergy efficiency of {context} while staying stable during {scenario}?"),
    Pattern::new("Thermodynamics", Debugging, 6, "The measured efficiency of {context} drops sharply after {scenario}. How would you find the loss, given {constraint}?"),
    Pattern::new("Thermodynamics", Coding, 6, "Write a routine that evaluates the refrigerant states in {context} under {constraint}, and show how you would check it against {scenario}."),
    Pattern::new("Fluid Mechanics", Conceptual, 3, "Explain what the Reynolds number tells you about flow in {context}, how {constraint} changes the regime, and what happens during {scenario}."),
    Pattern::new("Fluid Mechanics", Design, 6, "Size the pumps and piping for {context} to satisfy {constraint} and cope with {scenario}."),
    Pattern::new("Fluid Mechanics", Debugging, 7, "Cavitation damage appears in {context} after {scenario}. Walk through your diagnosis, keeping {constraint} in mind."),
    Pattern::new("Fluid Mechanics", System, 8, "Build a system-level flow model of {context} that predicts behaviour during {scenario} within {constraint}."),
    Pattern::new("Fluid Mechanics", Optimization, 7, "How would you cut pressure losses in {context} under {constraint} without hurting performance during {scenario}?"),
    Pattern::new("Heat Transfer", Conceptual, 4, "Explain how conduction, convection and radiation share the heat load in {context}, given {constraint}, and which dominates during {scenario}."),
    Pattern::new("Heat Transfer", Design, 7, "Design a heat exchanger for {context} that honours {constraint} and tolerates {scenario}."),
    Pattern::new("Heat Transfer", Coding, 7, "Write a finite-difference solver for the transient temperature field in {context} under {constraint}, and explain how it handles {scenario}."),
    Pattern::new("Heat Transfer", Debugging, 6, "Hot spots appear in {context} during {scenario}. How would you locate the cause while respecting {constraint}?"),
    Pattern::new("Heat Transfer", Scalability, 8, "How would you scale the cooling strategy of {context} to twice the heat load, through {scenario} and within {constraint}?"),
    Pattern::new("Machine Design", Conceptual, 3, "Explain how you would choose a safety factor for the shafts in {context}, given {constraint}, and how {scenario} changes it."),
    Pattern::new("Machine Design", Design, 6, "Design the gear train for {context} so it satisfies {constraint} and survives {scenario}."),
    Pattern::new("Machine Design", Debugging, 7, "Bearings in {context} keep failing early after {scenario}. How would you find the root cause under {constraint}?"),
    Pattern::new("Machine Design", Optimization, 8, "How would you lightweight the main frame of {context} under {constraint} without losing stiffness during {scenario}?"),
    Pattern::new("Machine Design", Behavioral, 4, "Tell me how you would defend a conservative design margin for {context} to management before {scenario}, given {constraint}."),
    Pattern::new("Dynamics & Vibration", Conceptual, 5, "Explain why resonance threatens {context}, how {constraint} shifts the natural frequencies, and what excites it during {scenario}."),
    Pattern::new("Dynamics & Vibration", Debugging, 8, "Vibration levels in {context} triple during {scenario}. How would you diagnose the source, given {constraint}?"),
    Pattern::new("Dynamics & Vibration", Design, 7, "Design an isolation mount for {context} that meets {constraint} and damps the inputs from {scenario}."),
    Pattern::new("Dynamics & Vibration", System, 6, "Set up condition monitoring for {context} that catches degradation before {scenario} and respects {constraint}."),
    Pattern::new("Dynamics & Vibration", Coding, 8, "Write a modal-analysis script for {context} that accounts for {constraint}, and show how you would validate it after {scenario}."),
    Pattern::new("Manufacturing", Design, 5, "Plan the manufacturing process for {context} under {constraint}, allowing for {scenario}."),
    Pattern::new("Manufacturing", Optimization, 6, "How would you cut the cycle time for {context} under {constraint} without raising scrap during {scenario}?"),
    Pattern::new("Manufacturing", Scalability, 7, "How would you ramp production of {context} tenfold through {scenario} while meeting {constraint}?"),
    Pattern::new("Manufacturing", Behavioral, 5, "Describe how you would get shop-floor buy-in for a new process on {context} during {scenario} when {constraint} applies."),
    Pattern::new("Manufacturing", Security, 6, "During {scenario}, how would you keep operators safe around {context} while meeting {constraint}?"),
    Pattern::new("Materials & Failure", Conceptual, 5, "Explain how fatigue life is estimated for {context}, why {constraint} matters, and how {scenario} consumes that life."),
    Pattern::new("Materials & Failure", Debugging, 7, "A weld on {context} fractured after {scenario}. How would you run the failure investigation under {constraint}?"),
    Pattern::new("Materials & Failure", Design, 6, "Select materials for {context} that satisfy {constraint} and resist {scenario}."),
    Pattern::new("Materials & Failure", Architecture, 8, "Set out a damage-tolerance philosophy for {context} that honours {constraint} and stays safe through {scenario}."),
    Pattern::new("Materials & Failure", Security, 7, "How would you guard {context} against catastrophic failure during {scenario} while meeting {constraint}?"),
    Pattern::new("Mechatronics", Design, 6, "Design the actuation and sensing layout for {context} to meet {constraint} and cope with {scenario}."),
    Pattern::new("Mechatronics", Coding, 7, "Write the control loop for a servo axis in {context} that meets {constraint}, and explain how it reacts to {scenario}."),
    Pattern::new("Mechatronics", Architecture, 9, "Architect the control hardware and software split for {context} so it satisfies {constraint} and degrades gracefully during {scenario}."),
    Pattern::new("Mechatronics", Scalability, 6, "How would you extend {context} from one prototype to a fleet, through {scenario} and within {constraint}?"),
    Pattern::new("Mechatronics", Behavioral, 3, "Tell me about a time you debugged a hardware-software interaction in something like {context}. How did {constraint} shape the work, and what happened during {scenario}?"),
];

pub(super) const CONTEXTS: &[Fragment] = &[
    Fragment::new("Energy", 7, "a combined-cycle gas turbine"),
    Fragment::new("Energy", 6, "a steam Rankine power plant"),
    Fragment::new("Energy", 5, "a rooftop solar thermal collector"),
    Fragment::new("Energy", 8, "a small modular reactor coolant loop"),
    Fragment::new("Aerospace", 8, "a turbofan engine fan stage"),
    Fragment::new("Aerospace", 7, "a satellite thermal control system"),
    Fragment::new("Aerospace", 7, "an aircraft landing gear"),
    Fragment::new("Aerospace", 6, "a drone propulsion unit"),
    Fragment::new("Automotive", 6, "an electric vehicle battery pack"),
    Fragment::new("Automotive", 5, "a diesel engine cooling circuit"),
    Fragment::new("Automotive", 6, "a suspension control arm"),
    Fragment::new("Automotive", 5, "a dual-clutch gearbox"),
    Fragment::new("Buildings", 4, "an office HVAC air-handling unit"),
    Fragment::new("Buildings", 5, "a data-centre chilled-water plant"),
    Fragment::new("Buildings", 4, "a hospital ventilation system"),
    Fragment::new("Buildings", 3, "a domestic heat pump"),
    Fragment::new("Industry", 6, "a high-speed packaging line"),
    Fragment::new("Industry", 7, "a CNC machining centre"),
    Fragment::new("Industry", 5, "a conveyor sorting system"),
    Fragment::new("Industry", 6, "an injection-moulding press"),
    Fragment::new("Industry", 7, "a centrifugal compressor station"),
    Fragment::new("Robotics", 7, "a six-axis welding robot"),
    Fragment::new("Robotics", 6, "an autonomous warehouse robot"),
    Fragment::new("Robotics", 8, "a surgical robot arm"),
    Fragment::new("Marine", 6, "a ship propeller shaft"),
    Fragment::new("Marine", 7, "an offshore wind turbine gearbox"),
    Fragment::new("Consumer", 4, "a household washing machine"),
    Fragment::new("Consumer", 3, "a bicycle drivetrain"),
    Fragment::new("Consumer", 5, "a laptop cooling fan"),
    Fragment::new("Rail", 6, "a high-speed train bogie"),
];

pub(super) const CONSTRAINTS: &[Fragment] = &[
    Fragment::new("Mass", 6, "a 20% weight-reduction target"),
    Fragment::new("Mass", 7, "a strict flight mass budget"),
    Fragment::new("Mass", 4, "a fixed packaging envelope"),
    Fragment::new("Efficiency", 7, "a 60% thermal efficiency goal"),
    Fragment::new("Efficiency", 6, "tight fuel consumption limits"),
    Fragment::new("Efficiency", 5, "an energy label rating of A+++"),
    Fragment::new("Cost", 4, "a unit cost cap of 50 dollars"),
    Fragment::new("Cost", 5, "existing tooling reuse"),
    Fragment::new("Cost", 3, "off-the-shelf components only"),
    Fragment::new("Environment", 6, "operation from -40 to 85 degrees C"),
    Fragment::new("Environment", 7, "a salt-spray corrosive atmosphere"),
    Fragment::new("Environment", 5, "a dusty desert site"),
    Fragment::new("Environment", 6, "a low-GWP refrigerant mandate"),
    Fragment::new("Noise", 5, "a 45 dB noise ceiling"),
    Fragment::new("Noise", 6, "strict vibration limits for nearby equipment"),
    Fragment::new("Standards", 6, "ASME Boiler and Pressure Vessel Code rules"),
    Fragment::new("Standards", 7, "ISO 26262 functional safety"),
    Fragment::new("Standards", 5, "ASHRAE 62.1 ventilation rates"),
    Fragment::new("Standards", 7, "FAA certification requirements"),
    Fragment::new("Reliability", 7, "a 20-year maintenance-free life"),
    Fragment::new("Reliability", 6, "a 10,000-hour service interval"),
    Fragment::new("Reliability", 8, "a single-point-failure prohibition"),
    Fragment::new("Manufacturing", 5, "additive manufacturing only"),
    Fragment::new("Manufacturing", 4, "a two-week prototype turnaround"),
    Fragment::new("Manufacturing", 6, "tolerances of plus or minus 5 microns"),
    Fragment::new("Manufacturing", 5, "limited welding capability in-house"),
    Fragment::new("Power", 6, "a 5 kW electrical supply limit"),
    Fragment::new("Power", 5, "battery-only operation"),
    Fragment::new("Power", 7, "a peak torque cap of 300 Nm"),
    Fragment::new("Safety", 6, "mandatory fail-safe braking"),
];

pub(super) const SCENARIOS: &[Fragment] = &[
    Fragment::new("Load", 7, "a sudden full-load rejection"),
    Fragment::new("Load", 6, "repeated cold starts"),
    Fragment::new("Load", 5, "a duty-cycle change to continuous running"),
    Fragment::new("Load", 7, "an emergency stop at full speed"),
    Fragment::new("Load", 6, "overload from a jammed conveyor"),
    Fragment::new("Environment", 6, "a record summer heatwave"),
    Fragment::new("Environment", 5, "an extended cold snap"),
    Fragment::new("Environment", 6, "a sandstorm"),
    Fragment::new("Environment", 7, "seawater ingress"),
    Fragment::new("Failure", 8, "a coolant pump failure"),
    Fragment::new("Failure", 7, "a seized bearing"),
    Fragment::new("Failure", 8, "a fan blade-off event"),
    Fragment::new("Failure", 6, "a sensor dropout"),
    Fragment::new("Failure", 7, "a hydraulic hose rupture"),
    Fragment::new("Failure", 6, "a lubrication system contamination"),
    Fragment::new("Operations", 5, "a maintenance crew shortage"),
    Fragment::new("Operations", 4, "a missed inspection interval"),
    Fragment::new("Operations", 5, "an operator running outside procedure"),
    Fragment::new("Operations", 6, "a long storage period before commissioning"),
    Fragment::new("Supply", 5, "a supplier switching alloy grades"),
    Fragment::new("Supply", 4, "a shortage of a key bearing"),
    Fragment::new("Supply", 5, "a late change to the motor vendor"),
    Fragment::new("Testing", 6, "a failed qualification test"),
    Fragment::new("Testing", 7, "an unexpected resonance during commissioning"),
    Fragment::new("Testing", 5, "a customer acceptance trial"),
    Fragment::new("Transport", 6, "rough road transport to site"),
    Fragment::new("Transport", 7, "a hard landing"),
    Fragment::new("Transport", 6, "a rail shunting impact"),
    Fragment::new("Oversight", 6, "a recall investigation"),
    Fragment::new("Oversight", 5, "a warranty claim spike"),
];
